// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for the capture flow
//!
//! This module provides command-line functionality for:
//! - Running the capture lifecycle against the virtual camera
//! - Classifying an image file directly
//! - Rendering a category card

use base64::{Engine, prelude::BASE64_STANDARD};
use recycle_camera::app::result::ClusterResultView;
use recycle_camera::app::{CapturePage, Message};
use recycle_camera::backends::camera::types::DisplaySurface;
use recycle_camera::backends::camera::virtual_device::VirtualCamera;
use recycle_camera::card::CategoryCard;
use recycle_camera::classify::{ClusterResolver, GraphqlClusterClient};
use recycle_camera::config::CaptureConfig;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// How long the demo waits for any single lifecycle event
const DEMO_STEP_TIMEOUT: Duration = Duration::from_secs(60);

/// Forward the next async completion back into the page
async fn pump(
    page: &mut CapturePage,
    rx: &mut UnboundedReceiver<Message>,
) -> Result<(), String> {
    match tokio::time::timeout(DEMO_STEP_TIMEOUT, rx.recv()).await {
        Ok(Some(message)) => {
            page.handle(message);
            Ok(())
        }
        Ok(None) => Err("message channel closed".to_string()),
        Err(_) => Err("timed out waiting for lifecycle event".to_string()),
    }
}

/// Run the capture lifecycle once against the virtual camera.
///
/// Walks the full flow: surface ready, hardware start, shutter press,
/// classification, shutter release. The classification request goes to the
/// configured endpoint; without a reachable service the result renderer
/// simply shows the failure, as it would in the app.
pub fn run_demo(endpoint: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CaptureConfig::load();
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let resolver = Arc::new(GraphqlClusterClient::new(
            &config.endpoint,
            Duration::from_secs(config.request_timeout_secs),
        ));
        let backend = Arc::new(VirtualCamera::new());
        let (mut page, mut rx) = CapturePage::new(config, backend, resolver);
        page.set_cluster_callback(Box::new(|cluster| {
            println!("Cluster received: {} ({})", cluster.cluster_name, cluster.cluster);
        }));

        let view = ClusterResultView::new();

        page.handle(Message::DisplayTargetReady(DisplaySurface(1)));
        pump(&mut page, &mut rx).await?;
        print_plan(&page, &view);

        println!("-- shutter pressed --");
        page.handle(Message::ShutterChanged(true));
        print_plan(&page, &view);
        pump(&mut page, &mut rx).await?;
        print_plan(&page, &view);

        println!("-- shutter released --");
        page.handle(Message::ShutterChanged(false));
        pump(&mut page, &mut rx).await?;
        print_plan(&page, &view);

        page.handle(Message::Teardown);
        Ok::<(), String>(())
    })?;

    Ok(())
}

/// Classify a single image file and print the resulting cluster
pub fn classify_file(
    image: PathBuf,
    endpoint: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = CaptureConfig::load();
    let endpoint = endpoint.unwrap_or(config.endpoint);

    let bytes = std::fs::read(&image)?;
    let format = image::guess_format(&bytes)?;
    let mime = format.to_mime_type();
    let data_uri = format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(&bytes));
    println!("Submitting {} ({} bytes) to {}", image.display(), bytes.len(), endpoint);

    let runtime = tokio::runtime::Runtime::new()?;
    let cluster = runtime.block_on(async {
        let client = GraphqlClusterClient::new(
            &endpoint,
            Duration::from_secs(config.request_timeout_secs),
        );
        client.get_cluster(data_uri).await
    })?;

    println!("{} - {}", cluster.cluster_name, cluster.message);
    for material in &cluster.materials {
        println!("  [{}] {}", material.material_id, material.description);
    }
    Ok(())
}

/// Render a category card to stdout
pub fn show_card(image: String, name: String) -> Result<(), Box<dyn std::error::Error>> {
    let view = CategoryCard::new(&image, &name).render();
    println!("img: {} (alt: {})", view.image_src, view.image_alt);
    println!("caption: {}", view.caption);
    Ok(())
}

fn print_plan(page: &CapturePage, view: &ClusterResultView) {
    let plan = page.render();
    if plan.show_spinner {
        println!("[spinner]");
    }
    if plan.video.hidden {
        println!("[video hidden]");
    } else {
        println!("[live video]");
    }
    if let Some(still) = &plan.still {
        println!("[still: {} bytes]", still.len());
    }
    for line in view.lines(&plan.result.query) {
        println!("  {}", line);
    }
}
