use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    pub whiskey: String,

    pub type_id: i32,

    pub country: String,

    pub part_of_country: Option<String>,

    pub age_in_years: Option<f64>,

    pub proof: f64,

    pub color_id: Option<i32>,

    pub mash_bill: Option<String>,

    pub maturation_details: Option<String>,

    pub nose: String,

    pub palate: String,

    pub finish: String,

    pub rating_id: i32,

    pub notes: Option<String>,

    /// Set once on insert, never updated.
    pub publication_date: Date,

    pub image_url: Option<String>,

    pub published: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(
        belongs_to = "super::whiskey_types::Entity",
        from = "Column::TypeId",
        to = "super::whiskey_types::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    WhiskeyTypes,

    #[sea_orm(
        belongs_to = "super::colors::Entity",
        from = "Column::ColorId",
        to = "super::colors::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Colors,

    #[sea_orm(
        belongs_to = "super::ratings::Entity",
        from = "Column::RatingId",
        to = "super::ratings::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Ratings,

    #[sea_orm(has_many = "super::bookmarks::Entity")]
    Bookmarks,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::whiskey_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WhiskeyTypes.def()
    }
}

impl Related<super::colors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Colors.def()
    }
}

impl Related<super::ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl Related<super::bookmarks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookmarks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
