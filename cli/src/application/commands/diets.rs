use nutree_core::domain::diet::ports::DietService;

use crate::application::output::{OutputFormat, render_diets};

pub async fn list_diets<S>(service: &S, format: OutputFormat) -> anyhow::Result<String>
where
    S: DietService,
{
    let diets = service.get_diets().await?;
    Ok(render_diets(&diets, format)?)
}
