use console::style;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use tank_entity::tank_details;

pub async fn list_tanks(db: &DatabaseConnection) -> Result<Vec<tank_details::Model>, DbErr> {
    tank_details::Entity::find()
        .order_by_asc(tank_details::Column::TankId)
        .all(db)
        .await
}

pub async fn find_by_tank_number(
    db: &DatabaseConnection,
    tank_number: &str,
) -> Result<Option<tank_details::Model>, DbErr> {
    use sea_orm::{ColumnTrait, QueryFilter};

    tank_details::Entity::find()
        .filter(tank_details::Column::TankNumber.eq(tank_number))
        .one(db)
        .await
}

/// Pretty-printed JSON array of full tank rows.
pub fn render_json(tanks: &[tank_details::Model]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tanks)
}

/// Fixed-width summary table, one line per tank.
pub fn render_table(tanks: &[tank_details::Model]) -> String {
    let mut lines = vec![format!(
        "{:<4} {:<14} {:<8} {:<6} {:>10} {:>6} {:>8} {:>8} {:<8}",
        "ID", "TANK NUMBER", "STATUS", "MFGR", "CAPACITY L", "MAWP", "GROSS KG", "MPL KG", "CABINET"
    )];

    for tank in tanks {
        lines.push(format!(
            "{:<4} {:<14} {:<8} {:<6} {:>10} {:>6} {:>8} {:>8} {:<8}",
            tank.tank_id,
            tank.tank_number,
            text(tank.status.as_deref()),
            text(tank.mfgr.as_deref()),
            number(tank.capacity_l),
            tank.mawp.map_or_else(|| "-".to_string(), |mawp| format!("{mawp:.1}")),
            number(tank.gross_kg),
            number(tank.mpl_kg),
            text(tank.cabinet_type.as_deref()),
        ));
    }

    lines.join("\n")
}

pub fn print_table(tanks: &[tank_details::Model]) {
    if tanks.is_empty() {
        println!("{}", style("No tanks registered").yellow());
        return;
    }

    let table = render_table(tanks);
    let mut rows = table.lines();
    if let Some(header) = rows.next() {
        println!("{}", style(header).bold());
    }
    for row in rows {
        println!("{row}");
    }
    println!("{}", style(format!("{} tank(s)", tanks.len())).dim());
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn number(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
