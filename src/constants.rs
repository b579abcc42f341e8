/// Target database; not configurable.
pub const DATABASE_NAME: &str = "employees";
