//! Render timing metrics.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use shoe_card::Variant;

use crate::id::RenderId;

/// Metrics for a whole render run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMetrics {
    /// Render ID for correlation.
    pub render_id: String,
    /// Catalog path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    /// Cards rendered, in order.
    pub cards: Vec<CardMetrics>,
    /// Number of cards per variant.
    pub variants: BTreeMap<String, usize>,
    /// Listings rejected before rendering.
    pub skipped: Vec<SkippedListing>,
    /// Total bytes of card markup.
    pub total_bytes: usize,
    /// Total run duration (microseconds).
    pub total_duration_us: u64,
}

/// Metrics for a single card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardMetrics {
    pub slug: String,
    pub variant: Variant,
    /// Bytes of card markup.
    pub bytes: usize,
    /// Build plus render time (microseconds).
    pub duration_us: u64,
}

/// A listing that failed validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedListing {
    pub slug: String,
    pub reason: String,
}

/// Collector for render metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    render_id: RenderId,
    catalog: Option<String>,
    start: Instant,
    cards: Vec<CardMetrics>,
    skipped: Vec<SkippedListing>,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    pub fn new(render_id: RenderId) -> Self {
        Self {
            render_id,
            catalog: None,
            start: Instant::now(),
            cards: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Set catalog path.
    pub fn set_catalog(&mut self, catalog: impl Into<String>) {
        self.catalog = Some(catalog.into());
    }

    /// Record a rendered card.
    pub fn record_card(&mut self, slug: &str, variant: Variant, bytes: usize, duration: Duration) {
        self.cards.push(CardMetrics {
            slug: slug.to_string(),
            variant,
            bytes,
            duration_us: duration.as_micros() as u64,
        });
    }

    /// Record a listing that was not rendered.
    pub fn record_skipped(&mut self, slug: &str, reason: impl Into<String>) {
        self.skipped.push(SkippedListing {
            slug: slug.to_string(),
            reason: reason.into(),
        });
    }

    /// Number of cards recorded so far.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Get total elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Finalize and return the metrics.
    pub fn finalize(self) -> RenderMetrics {
        let mut variants: BTreeMap<String, usize> = Variant::all()
            .iter()
            .map(|v| (v.as_str().to_string(), 0))
            .collect();
        for card in &self.cards {
            *variants.entry(card.variant.as_str().to_string()).or_insert(0) += 1;
        }

        RenderMetrics {
            render_id: self.render_id.to_string(),
            catalog: self.catalog,
            total_bytes: self.cards.iter().map(|c| c.bytes).sum(),
            variants,
            cards: self.cards,
            skipped: self.skipped,
            total_duration_us: self.start.elapsed().as_micros() as u64,
        }
    }
}

impl RenderMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as JSON (pretty printed).
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Render: {}", self.render_id));

        if let Some(catalog) = &self.catalog {
            lines.push(format!("  Catalog: {}", catalog));
        }

        lines.push(format!(
            "  Cards: {} ({} bytes) in {}us ({:.2}ms)",
            self.cards.len(),
            self.total_bytes,
            self.total_duration_us,
            self.total_duration_us as f64 / 1000.0
        ));

        lines.push("  Variants:".to_string());
        for (variant, count) in &self.variants {
            lines.push(format!("    {}: {}", variant, count));
        }

        if !self.skipped.is_empty() {
            lines.push("  Skipped:".to_string());
            for skipped in &self.skipped {
                lines.push(format!("    {}: {}", skipped.slug, skipped.reason));
            }
        }

        lines.join("\n")
    }
}
