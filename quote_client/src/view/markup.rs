//! HTML rendering of the result card and error banner.
//!
//! `HtmlView` keeps the state of each page region in memory the way a DOM
//! would: a visibility flag per region and the markup written into the error
//! banner and result container. Every interpolated value is HTML-escaped.
use crate::model::quote::ResultCard;
use crate::view::QuoteView;

/// In-memory page regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlView {
    /// Loading indicator visibility.
    pub loading_visible: bool,
    /// Whether the submit control accepts clicks.
    pub submit_enabled: bool,
    /// Error banner visibility.
    pub error_visible: bool,
    /// Markup inside the error banner.
    pub error_html: String,
    /// Markup inside the result container.
    pub result_html: String,
}

impl Default for HtmlView {
    fn default() -> Self {
        Self {
            loading_visible: false,
            submit_enabled: true,
            error_visible: false,
            error_html: String::new(),
            result_html: String::new(),
        }
    }
}

impl HtmlView {
    /// Creates the regions in their initial state: nothing shown, submit enabled.
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuoteView for HtmlView {
    fn set_loading(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn show_error(&mut self, message: &str) {
        self.error_html = render_error(message);
        self.error_visible = true;
    }

    fn hide_error(&mut self) {
        self.error_visible = false;
    }

    fn render_result(&mut self, card: &ResultCard) {
        self.result_html = render_card(card);
    }

    fn clear_result(&mut self) {
        self.result_html.clear();
    }
}

/// Markup for the error banner.
pub fn render_error(message: &str) -> String {
    format!(r#"<div class="error">❌ {}</div>"#, escape_html(message))
}

/// Markup for the result card.
pub fn render_card(card: &ResultCard) -> String {
    let class = card.polarity.to_string();
    let detail = |label: &str, value: String, value_class: Option<&str>| {
        let value_class = value_class.map(|c| format!(" {}", c)).unwrap_or_default();
        format!(
            r#"
                    <div class="detail-item">
                        <div class="detail-label">{}</div>
                        <div class="detail-value{}">{}</div>
                    </div>"#,
            label, value_class, value
        )
    };

    let details = [
        detail(
            "Change",
            format!("{} {}", card.polarity.icon(), escape_html(&card.change)),
            Some(class.as_str()),
        ),
        detail("Change %", escape_html(&card.change_percent), Some(class.as_str())),
        detail("Volume", escape_html(&card.volume), None),
        detail("Day High", format!("${}", escape_html(&card.high)), None),
        detail("Day Low", format!("${}", escape_html(&card.low)), None),
        detail("Open", format!("${}", escape_html(&card.open)), None),
    ]
    .concat();

    format!(
        r#"
            <div class="stock-card">
                <div class="stock-header">
                    <div>
                        <div class="stock-symbol">{symbol}</div>
                        <div class="stock-name">{name}</div>
                    </div>
                    <div class="stock-price {class}">${price}</div>
                </div>
                <div class="stock-details">{details}
                </div>
                <div class="stock-updated">Last updated: {updated}</div>
            </div>
        "#,
        symbol = escape_html(&card.symbol),
        name = escape_html(&card.name),
        class = class,
        price = escape_html(&card.price),
        details = details,
        updated = escape_html(&card.last_updated),
    )
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::quote::Polarity;

    fn card(polarity: Polarity, change: &str) -> ResultCard {
        ResultCard {
            symbol: "IBM".to_string(),
            name: "IBM Corporation".to_string(),
            price: "182.52".to_string(),
            change: change.to_string(),
            change_percent: "-0.56%".to_string(),
            volume: "3,512,776".to_string(),
            high: "184.10".to_string(),
            low: "181.75".to_string(),
            open: "183.40".to_string(),
            last_updated: "2024-05-03".to_string(),
            polarity,
        }
    }

    #[test]
    fn card_contains_every_field() {
        let html = render_card(&card(Polarity::Negative, "-1.03"));

        assert!(html.contains(r#"<div class="stock-symbol">IBM</div>"#));
        assert!(html.contains(r#"<div class="stock-name">IBM Corporation</div>"#));
        assert!(html.contains(r#"<div class="stock-price negative">$182.52</div>"#));
        assert!(html.contains("📉 -1.03"));
        assert!(html.contains(r#"<div class="detail-value negative">-0.56%</div>"#));
        assert!(html.contains(r#"<div class="detail-value">3,512,776</div>"#));
        assert!(html.contains(r#"<div class="detail-value">$184.10</div>"#));
        assert!(html.contains(r#"<div class="detail-value">$181.75</div>"#));
        assert!(html.contains(r#"<div class="detail-value">$183.40</div>"#));
        assert!(html.contains("Last updated: 2024-05-03"));
    }

    #[test]
    fn positive_card_uses_positive_class_and_icon() {
        let html = render_card(&card(Polarity::Positive, "+1.03"));
        assert!(html.contains(r#"<div class="stock-price positive">"#));
        assert!(html.contains("📈 +1.03"));
        assert!(!html.contains("negative"));
    }

    #[test]
    fn values_are_escaped() {
        let mut hostile = card(Polarity::Positive, "+1.00");
        hostile.name = "<script>alert('x')</script>".to_string();
        let html = render_card(&hostile);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));

        assert_eq!(
            render_error("a < b & \"c\""),
            r#"<div class="error">❌ a &lt; b &amp; &quot;c&quot;</div>"#
        );
    }

    #[test]
    fn regions_start_idle() {
        let view = HtmlView::new();
        assert!(!view.loading_visible);
        assert!(view.submit_enabled);
        assert!(!view.error_visible);
        assert!(view.result_html.is_empty());
    }
}
