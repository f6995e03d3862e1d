use crate::{context, db};
use anyhow::{Context, Result};

pub fn init_data_dir(ctx: &context::Context) -> Result<()> {
    let data_dir = std::path::PathBuf::from(&ctx.config.data_dir);
    std::fs::create_dir_all(&data_dir)?;
    Ok(())
}

pub fn init_catalog(ctx: &context::Context) -> Result<db::SqliteCatalog> {
    let data_dir = std::path::PathBuf::from(&ctx.config.data_dir);
    let db_path = data_dir
        .join("trackside.sqlite")
        .to_string_lossy()
        .into_owned();
    let catalog = db::SqliteCatalog::new(&db_path);
    if ctx.config.reset {
        catalog.reset_all().context("resetting catalog")?;
    }
    catalog
        .init(ctx.config.seed_races)
        .context("seeding catalog")?;
    Ok(catalog)
}
