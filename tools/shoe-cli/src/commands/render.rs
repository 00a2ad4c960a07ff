//! Render a catalog to HTML.

use std::time::Instant;

use anyhow::{bail, Context as _, Result};
use shoe_card::html::{grid_from_rendered, page_from_grid, render_card};
use shoe_card::{build_card, Listing};
use shoe_observability::{MetricsCollector, StructuredLogger};

use super::RenderArgs;
use crate::catalog::load_catalog;
use crate::context::Context;
use crate::output::format_bytes;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let catalog_path = ctx.resolve_path(&args.catalog);
    let logger = ctx.logger("render").with_catalog(&args.catalog);

    let listings = load_catalog(&catalog_path).await?;
    logger
        .info_builder("Catalog loaded")
        .field_i64("listings", listings.len() as i64)
        .field("today", ctx.today.to_string())
        .emit();

    let mut metrics = MetricsCollector::new(logger.render_id().clone());
    metrics.set_catalog(&args.catalog);

    let cards = render_cards(&listings, ctx, &logger, &mut metrics, args.strict)?;

    let grid = grid_from_rendered(&cards);
    let html = if args.fragment {
        grid
    } else {
        let title = args
            .title
            .as_deref()
            .unwrap_or(&ctx.config.output.title);
        page_from_grid(title, &grid, &ctx.config.card.theme)
    };

    match &args.output {
        Some(path) => {
            let out_path = ctx.resolve_path(path);
            tokio::fs::write(&out_path, &html)
                .await
                .with_context(|| format!("Failed to write output: {}", out_path.display()))?;
            ctx.output.success(&format!(
                "Rendered {} card(s) to {} ({})",
                cards.len(),
                out_path.display(),
                format_bytes(html.len() as u64)
            ));
        }
        None => println!("{}", html),
    }

    let elapsed = metrics.elapsed();
    let final_metrics = metrics.finalize();
    logger
        .info_builder("Render complete")
        .field_i64("cards", final_metrics.cards.len() as i64)
        .field_i64("skipped", final_metrics.skipped.len() as i64)
        .field_i64("bytes", html.len() as i64)
        .duration_ms("duration_ms", elapsed)
        .emit();

    if ctx.output.is_json() {
        eprintln!("{}", final_metrics.to_json_pretty());
    } else if ctx.output.is_verbose() {
        eprintln!("\n{}", final_metrics.to_summary());
    }

    Ok(())
}

/// Validate, build and render every listing, recording per-card metrics.
fn render_cards(
    listings: &[Listing],
    ctx: &Context,
    logger: &StructuredLogger,
    metrics: &mut MetricsCollector,
    strict: bool,
) -> Result<Vec<String>> {
    let pb = ctx.output.progress(listings.len() as u64, "Rendering cards");
    let mut cards = Vec::with_capacity(listings.len());

    for listing in listings {
        pb.inc(1);

        if let Err(e) = listing.validate() {
            if strict {
                pb.abandon();
                logger
                    .error_builder("Invalid listing")
                    .field("slug", listing.slug.clone())
                    .field("reason", e.to_string())
                    .emit();
                bail!("Invalid listing: {}", e);
            }
            logger
                .warn_builder("Listing skipped")
                .field("slug", listing.slug.clone())
                .field("reason", e.to_string())
                .emit();
            ctx.output.warn(&format!("Skipping {}: {}", listing.slug, e));
            metrics.record_skipped(&listing.slug, e.to_string());
            continue;
        }

        let started = Instant::now();
        let card = build_card(listing, &ctx.config.card, ctx.today);
        let html = render_card(&card);
        metrics.record_card(&card.slug, card.variant, html.len(), started.elapsed());

        logger
            .debug_builder("Card built")
            .field("slug", card.slug.clone())
            .field("variant", card.variant.as_str())
            .emit();

        cards.push(html);
    }

    pb.finish_and_clear();
    Ok(cards)
}
