use crate::entities::{colors, prelude::*, ratings, whiskey_types};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::Query;

#[derive(DeriveMigrationName)]
pub struct Migration;

const WHISKEY_TYPES: &[(i32, &str)] = &[
    (1, "Bourbon"),
    (2, "Rye"),
    (3, "Tennessee"),
    (4, "Blended Scotch"),
    (5, "Blended Malt"),
    (6, "Single Grain"),
    (7, "Single Malt"),
    (8, "Single Pot Still"),
    (9, "Wheat"),
    (10, "Corn"),
    (11, "Other"),
];

/// (id, label, grade, hex, tailwind name)
const COLORS: &[(i32, &str, f64, &str, &str)] = &[
    (1, "gin clear", 0.0, "F8F8F5", "gin-clear"),
    (2, "white wine", 0.1, "F7F2C9", "white-wine"),
    (3, "pale straw", 0.2, "F5E8A3", "pale-straw"),
    (4, "pale gold", 0.3, "F4DB7D", "pale-gold"),
    (5, "yellow gold", 0.4, "F3D05F", "yellow-gold"),
    (6, "old gold", 0.5, "F0C44B", "old-gold"),
    (7, "amber", 0.6, "EBB33C", "amber"),
    (8, "deep gold", 0.7, "E9A93A", "deep-gold"),
    (9, "burnished", 0.8, "E49B34", "burnished"),
    (10, "amontillado sherry", 0.9, "F7C23B", "amontillado-sherry"),
    (11, "russet muscat", 1.0, "D8822B", "russet-muscat"),
    (12, "tawny", 1.1, "C96F25", "tawny"),
    (13, "auburn", 1.2, "B85E22", "auburn"),
    (14, "mahogany", 1.4, "8F3F1A", "mahogany"),
    (15, "oloroso sherry", 1.6, "7A3216", "oloroso-sherry"),
    (16, "burnt umber", 1.8, "5E2612", "burnt-umber"),
    (17, "treacle", 2.0, "3B180C", "treacle"),
];

const RATINGS: &[(i32, i32, &str)] = &[
    (1, 0, "undrinkable"),
    (2, 1, "poor"),
    (3, 2, "fair"),
    (4, 3, "good"),
    (5, 4, "very good"),
    (6, 5, "exceptional"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert_types = Query::insert();
        insert_types
            .into_table(WhiskeyTypes)
            .columns([whiskey_types::Column::Id, whiskey_types::Column::Label]);
        for (id, label) in WHISKEY_TYPES {
            insert_types.values_panic([(*id).into(), (*label).into()]);
        }
        manager.exec_stmt(insert_types).await?;

        let mut insert_colors = Query::insert();
        insert_colors.into_table(Colors).columns([
            colors::Column::Id,
            colors::Column::Label,
            colors::Column::ColorGrade,
            colors::Column::HexCode,
            colors::Column::TailwindName,
        ]);
        for (id, label, grade, hex, tailwind) in COLORS {
            insert_colors.values_panic([
                (*id).into(),
                (*label).into(),
                (*grade).into(),
                (*hex).into(),
                (*tailwind).into(),
            ]);
        }
        manager.exec_stmt(insert_colors).await?;

        let mut insert_ratings = Query::insert();
        insert_ratings.into_table(Ratings).columns([
            ratings::Column::Id,
            ratings::Column::NumberRating,
            ratings::Column::Label,
        ]);
        for (id, number, label) in RATINGS {
            insert_ratings.values_panic([(*id).into(), (*number).into(), (*label).into()]);
        }
        manager.exec_stmt(insert_ratings).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Ratings).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Colors).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(WhiskeyTypes).to_owned())
            .await?;

        Ok(())
    }
}
