//! HTML rendering for cards.

use crate::theme::Theme;
use crate::view::CardView;

/// Render a single card.
pub fn render_card(card: &CardView) -> String {
    let badge_html = match card.image.badge {
        Some(badge) => format!(
            r#"<div class="shoe-card__tag {}">{}</div>"#,
            badge.class(),
            escape_html(badge.label)
        ),
        None => String::new(),
    };

    let price_class = if card.price.struck {
        "shoe-card__price shoe-card__price--struck"
    } else {
        "shoe-card__price"
    };

    let sale_price = card
        .sale_price
        .as_deref()
        .map(escape_html)
        .unwrap_or_default();

    format!(
        r#"<a href="{href}" class="shoe-card__link">
    <article class="shoe-card" data-slug="{slug}" data-variant="{variant}">
        <div class="shoe-card__image-wrapper">
            <img src="{src}" alt="{alt}" class="shoe-card__image">
            {badge_html}
        </div>
        <div class="shoe-card__spacer" style="height: {spacer}px"></div>
        <div class="shoe-card__row">
            <h3 class="shoe-card__name">{name}</h3>
            <span class="{price_class}">{price}</span>
        </div>
        <div class="shoe-card__row">
            <p class="shoe-card__colors">{colors}</p>
            <span class="shoe-card__sale-price">{sale_price}</span>
        </div>
    </article>
</a>"#,
        href = escape_html(&card.href),
        slug = escape_html(&card.slug),
        variant = card.variant.as_str(),
        src = escape_html(&card.image.src),
        alt = escape_html(&card.image.alt),
        badge_html = badge_html,
        spacer = card.spacer_px,
        name = escape_html(&card.name),
        price_class = price_class,
        price = escape_html(&card.price.text),
        colors = escape_html(&card.color_label),
        sale_price = sale_price,
    )
}

/// Render a grid of cards.
pub fn render_grid(cards: &[CardView]) -> String {
    let rendered: Vec<String> = cards.iter().map(render_card).collect();
    grid_from_rendered(&rendered)
}

/// Wrap cards already passed through [`render_card`] in the grid section.
pub fn grid_from_rendered(rendered: &[String]) -> String {
    format!(
        r#"<section class="shoe-grid" data-count="{}">
    {}
</section>"#,
        rendered.len(),
        rendered.concat()
    )
}

/// Render a complete HTML document around a grid of cards.
pub fn render_page(title: &str, cards: &[CardView], theme: &Theme) -> String {
    page_from_grid(title, &render_grid(cards), theme)
}

/// Wrap an already rendered grid in a complete HTML document.
pub fn page_from_grid(title: &str, grid: &str, theme: &Theme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
    <main class="shoe-page">
        <h1 class="shoe-page__title">{title}</h1>
        {grid}
    </main>
</body>
</html>"#,
        title = escape_html(title),
        styles = card_styles(theme),
        grid = grid,
    )
}

/// Stylesheet for cards rendered with `theme`.
pub fn card_styles(theme: &Theme) -> String {
    let c = &theme.colors;
    let w = &theme.weights;

    format!(
        r#"
* {{ box-sizing: border-box; }}
body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; font-weight: {normal}; }}
.shoe-page {{ max-width: 1200px; margin: 0 auto; padding: 2rem; }}
.shoe-page__title {{ font-weight: {bold}; color: {gray900}; }}
.shoe-grid {{ display: flex; flex-wrap: wrap; gap: 32px; }}
.shoe-grid > .shoe-card__link {{ flex: 1 1 340px; }}

.shoe-card__link {{ text-decoration: none; color: inherit; }}
.shoe-card__image-wrapper {{ position: relative; }}
.shoe-card__image {{ width: 100%; border-radius: 16px 16px 4px 4px; }}
.shoe-card__tag {{ position: absolute; top: 12px; right: -4px; padding: 4px 8px; border-radius: 2px; font-size: 0.875rem; font-weight: {medium}; color: {white}; }}
.shoe-card__tag--sale {{ background-color: {primary}; }}
.shoe-card__tag--new {{ background-color: {secondary}; }}
.shoe-card__row {{ display: flex; justify-content: space-between; align-items: baseline; font-size: 1rem; }}
.shoe-card__name {{ font-weight: {medium}; color: {gray900}; }}
.shoe-card__price--struck {{ color: {gray700}; text-decoration: line-through; }}
.shoe-card__colors {{ color: {gray700}; }}
.shoe-card__sale-price {{ font-weight: {medium}; color: {primary}; }}
"#,
        normal = w.normal,
        medium = w.medium,
        bold = w.bold,
        white = c.white,
        primary = c.primary,
        secondary = c.secondary,
        gray700 = c.gray700,
        gray900 = c.gray900,
    )
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CardConfig;
    use crate::listing::Listing;
    use crate::view::build_card;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn card(sale_price: Option<i64>) -> CardView {
        let listing = Listing {
            slug: "hi-top".to_string(),
            name: "Hi <Top> & \"Co\"".to_string(),
            image_src: "/assets/hi-top.jpg".to_string(),
            price: 8000,
            sale_price,
            release_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            num_of_colors: 2,
        };
        build_card(&listing, &CardConfig::default(), today())
    }

    #[test]
    fn test_escapes_name() {
        let html = render_card(&card(None));
        assert!(html.contains("Hi &lt;Top&gt; &amp; &quot;Co&quot;"));
        assert!(!html.contains("<Top>"));
    }

    #[test]
    fn test_sale_markup() {
        let html = render_card(&card(Some(6000)));
        assert!(html.contains(r#"data-variant="on-sale""#));
        assert!(html.contains(r#"class="shoe-card__tag shoe-card__tag--sale">Sale<"#));
        assert!(html.contains("shoe-card__price--struck"));
        assert!(html.contains(r#"<span class="shoe-card__sale-price">$60.00</span>"#));
    }

    #[test]
    fn test_default_markup() {
        let html = render_card(&card(None));
        assert!(html.contains(r#"data-variant="default""#));
        assert!(!html.contains("shoe-card__tag"));
        assert!(!html.contains("shoe-card__price--struck"));
        assert!(html.contains(r#"<span class="shoe-card__sale-price"></span>"#));
        assert!(html.contains(r#"<a href="/shoe/hi-top""#));
    }

    #[test]
    fn test_grid_and_page() {
        let cards = vec![card(None), card(Some(4000))];
        let grid = render_grid(&cards);
        assert!(grid.contains(r#"data-count="2""#));
        assert_eq!(grid.matches("<article").count(), 2);

        let page = render_page("Running & Trail", &cards, &Theme::default());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Running &amp; Trail</title>"));
        assert!(page.contains(".shoe-card__tag--sale { background-color: hsl(340deg 65% 47%); }"));
    }

    #[test]
    fn test_grid_from_rendered_matches_grid() {
        let cards = vec![card(None), card(Some(4000))];
        let rendered: Vec<String> = cards.iter().map(render_card).collect();
        assert_eq!(grid_from_rendered(&rendered), render_grid(&cards));
        assert_eq!(
            page_from_grid("Shoes", &grid_from_rendered(&rendered), &Theme::default()),
            render_page("Shoes", &cards, &Theme::default())
        );
    }

    #[test]
    fn test_zero_sale_price_markup() {
        let html = render_card(&card(Some(0)));
        assert!(html.contains("shoe-card__price--struck"));
        assert!(html.contains(r#"<span class="shoe-card__sale-price">$0.00</span>"#));
    }

    #[test]
    fn test_styles_follow_theme() {
        let mut theme = Theme::default();
        theme.colors.secondary = "teal".to_string();
        theme.weights.medium = 700;
        let css = card_styles(&theme);
        assert!(css.contains(".shoe-card__tag--new { background-color: teal; }"));
        assert!(css.contains(".shoe-card__name { font-weight: 700;"));
    }
}
