use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::{api::QueryOccupancy, render::Renderer, runtime::Runtime};

use super::config::Config;

/// List every desk known to the backend.
#[tracing::instrument(skip(runtime, api_url))]
pub async fn desks<R: Runtime>(runtime: R, api_url: Option<String>, color: bool) -> Result<()> {
    let config = Config::new(runtime, api_url)?;
    print_desks(&config.api, Renderer::new(color), &mut std::io::stdout()).await
}

/// List floors, zones and areas.
#[tracing::instrument(skip(runtime, api_url))]
pub async fn spaces<R: Runtime>(runtime: R, api_url: Option<String>, color: bool) -> Result<()> {
    let config = Config::new(runtime, api_url)?;
    print_spaces(&config.api, Renderer::new(color), &mut std::io::stdout()).await
}

pub async fn print_desks<Q: QueryOccupancy, W: Write>(
    api: &Q,
    renderer: Renderer,
    out: &mut W,
) -> Result<()> {
    let desks = api.list_desks().await.context("Failed to list desks")?;
    if desks.is_empty() {
        writeln!(out, "No desks found.")?;
        return Ok(());
    }

    debug!("Found {} desk(s)", desks.len());
    for desk in &desks {
        writeln!(out, "{}", renderer.desk(desk))?;
    }
    Ok(())
}

pub async fn print_spaces<Q: QueryOccupancy, W: Write>(
    api: &Q,
    renderer: Renderer,
    out: &mut W,
) -> Result<()> {
    let spaces = api.list_spaces().await.context("Failed to list spaces")?;
    if spaces.is_empty() {
        writeln!(out, "No spaces found.")?;
        return Ok(());
    }

    for space in &spaces {
        writeln!(out, "{}", renderer.space(space))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DeskRecommendation, DeskStatus, DeskType, MockQueryOccupancy, Space, SpaceType};
    use crate::error::QueryError;

    #[tokio::test]
    async fn test_print_desks() {
        let mut api = MockQueryOccupancy::new();
        api.expect_list_desks().times(1).returning(|| {
            Ok(vec![DeskRecommendation {
                id: "D-03".to_string(),
                desk_type: DeskType::Regular,
                area_id: "A2".to_string(),
                vergesense_area_id: "VS-A2".to_string(),
                floor: 2,
                zone: "Engineering".to_string(),
                location_description: "By the kitchen".to_string(),
                features: vec!["dual monitors".to_string()],
                status: DeskStatus::Maintenance,
                last_used: "2024-03-11T17:45:00Z".to_string(),
            }])
        });

        let mut out = Vec::new();
        print_desks(&api, Renderer::plain(), &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("D-03 - Regular Desk"));
        assert!(out.contains("Status: Maintenance"));
    }

    #[tokio::test]
    async fn test_print_desks_empty() {
        let mut api = MockQueryOccupancy::new();
        api.expect_list_desks().returning(|| Ok(vec![]));

        let mut out = Vec::new();
        print_desks(&api, Renderer::plain(), &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No desks found.\n");
    }

    #[tokio::test]
    async fn test_print_spaces_error_has_context() {
        let mut api = MockQueryOccupancy::new();
        api.expect_list_spaces().returning(|| {
            Err(QueryError::Service {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let mut out = Vec::new();
        let err = print_spaces(&api, Renderer::plain(), &mut out)
            .await
            .unwrap_err();

        assert_eq!(format!("{:#}", err), "Failed to list spaces: boom");
    }

    #[tokio::test]
    async fn test_print_spaces() {
        let mut api = MockQueryOccupancy::new();
        api.expect_list_spaces().returning(|| {
            Ok(vec![Space {
                id: "F1".to_string(),
                name: "Ground Floor".to_string(),
                space_type: SpaceType::Floor,
                capacity: 80,
                parent_id: None,
            }])
        });

        let mut out = Vec::new();
        print_spaces(&api, Renderer::plain(), &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "F1 - Ground Floor (floor, capacity 80)\n"
        );
    }
}
