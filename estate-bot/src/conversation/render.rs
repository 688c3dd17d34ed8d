//! Menus for the three result views: building list, one building, one unit.

use estate_core::{Button, Menu};
use property_store::PropertyRecord;
use search_orchestrator::{format_price, BuildingGroup};

use super::action::{BackTarget, CallbackAction, PageDirection};
use super::pager::page;
use super::session::SearchContext;

pub const CURRENCY: &str = "AED";

fn button(label: impl Into<String>, action: CallbackAction) -> Button {
    Button::new(label, action.to_string())
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
}

/// Building list, one button per building on the current page plus navigation.
pub fn results_menu(ctx: &SearchContext, page_size: usize) -> Menu {
    let current = page(&ctx.groups, ctx.page, page_size);
    let text = format!(
        "{}\n\nPage {}/{}",
        ctx.header,
        current.index + 1,
        current.count
    );

    let mut menu = Menu::new(text);
    for group in current.items {
        let Some(key) = ctx.keys.key(&group.building) else {
            continue;
        };
        menu = menu.row(vec![button(
            format!("{} ({})", group.building, group.records.len()),
            CallbackAction::OpenGroup(key.to_string()),
        )]);
    }

    let mut nav = Vec::new();
    if current.has_prev() {
        nav.push(button("« Prev", CallbackAction::Paginate(PageDirection::Prev)));
    }
    if current.has_next() {
        nav.push(button("Next »", CallbackAction::Paginate(PageDirection::Next)));
    }
    menu.row(nav)
}

/// One page of a building's units, cheapest first, plus navigation and a way back to the
/// list. The page indicator only shows when there is more than one page.
pub fn group_menu(group: &BuildingGroup, key: &str, page_index: usize, page_size: usize) -> Menu {
    let current = page(&group.records, page_index, page_size);
    let mut text = format!("{}: {} units", group.building, group.records.len());
    if current.count > 1 {
        text.push_str(&format!("\n\nPage {}/{}", current.index + 1, current.count));
    }

    let mut menu = Menu::new(text);
    for record in current.items {
        menu = menu.row(vec![button(
            format!(
                "{} bd, {} {}",
                or_na(record.beds),
                format_price(record.price),
                CURRENCY
            ),
            CallbackAction::OpenItem(record.id),
        )]);
    }

    let mut nav = Vec::new();
    if current.has_prev() {
        nav.push(button(
            "« Prev",
            CallbackAction::PaginateGroup(key.to_string(), PageDirection::Prev),
        ));
    }
    if current.has_next() {
        nav.push(button(
            "Next »",
            CallbackAction::PaginateGroup(key.to_string(), PageDirection::Next),
        ));
    }
    menu.row(nav).row(vec![button(
        "« Back to buildings",
        CallbackAction::GoBack(BackTarget::Groups),
    )])
}

/// Details of one unit with the agent's WhatsApp link.
pub fn unit_menu(record: &PropertyRecord, group_key: &str) -> Menu {
    let mut text = format_property_info(record);
    if let Some(ref name) = record.agent_name {
        text.push_str(&format!("\nAgent: {}", name));
    }
    if let Some(link) = record
        .agent_whatsapp
        .as_deref()
        .and_then(|phone| whatsapp_link(phone, &inquiry_text(record)))
    {
        text.push_str(&format!("\nWhatsApp: {}", link));
    }

    Menu::new(text).row(vec![button(
        "« Back to building",
        CallbackAction::GoBack(BackTarget::Group(group_key.to_string())),
    )])
}

/// One-line summary: id, beds, baths, area, price, then view, completion and furnishing
/// when known.
pub fn format_property_info(record: &PropertyRecord) -> String {
    let mut info = format!(
        "ID: {}, {} bedrooms, {} bathrooms, {} sqft, Price: {} {}",
        record.id,
        or_na(record.beds),
        or_na(record.baths),
        or_na(record.sqft.map(format_price)),
        format_price(record.price),
        CURRENCY
    );
    if let Some(ref view) = record.view {
        info.push_str(&format!(", View: {}", view));
    }
    if let Some(ref completion) = record.completion {
        info.push_str(&format!(", Status: {}", completion));
    }
    if let Some(ref furnishing) = record.furnishing {
        info.push_str(&format!(", Furnishing: {}", furnishing));
    }
    info
}

fn inquiry_text(record: &PropertyRecord) -> String {
    format!(
        "Hello! I'm interested in unit ID {} in {}, listed at {} {}.",
        record.id,
        record.building.as_deref().unwrap_or("your building"),
        format_price(record.price),
        CURRENCY
    )
}

/// `https://wa.me/<digits>?text=<message>`. `None` when `phone` has no digits.
pub fn whatsapp_link(phone: &str, message: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    reqwest::Url::parse_with_params(&format!("https://wa.me/{}", digits), &[("text", message)])
        .ok()
        .map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_orchestrator::{group_by_building, SearchOutcome, SearchStatus};

    fn record(id: i64, price: f64, building: &str) -> PropertyRecord {
        PropertyRecord {
            id,
            price,
            property_type: Some("Apartment".to_string()),
            purpose: Some("For Sale".to_string()),
            completion: Some("Ready".to_string()),
            handover_date: None,
            furnishing: None,
            studio: Some(false),
            sqft: Some(1_250.0),
            baths: Some(2),
            beds: Some(2),
            view: Some("Sea".to_string()),
            vacant: None,
            agent_name: Some("Alice".to_string()),
            agent_whatsapp: Some("+971 50 000 0001".to_string()),
            building: Some(building.to_string()),
            area: None,
        }
    }

    fn context(buildings: usize) -> SearchContext {
        let records = (0..buildings)
            .map(|i| record(i as i64 + 1, 1_000_000.0, &format!("Tower {}", i + 1)))
            .collect();
        SearchContext::from_outcome(SearchOutcome {
            status: SearchStatus::Success,
            message: format!("Found {} properties", buildings),
            results: group_by_building(records),
            criteria: None,
        })
    }

    #[test]
    fn test_results_menu_first_and_last_page() {
        let mut ctx = context(7);
        let first = results_menu(&ctx, 5);
        assert!(first.text.ends_with("Page 1/2"));
        assert_eq!(first.rows.len(), 6);
        assert_eq!(first.rows[0][0].label, "Tower 1 (1)");
        assert!(first.rows[0][0].data.starts_with("group:"));
        assert_eq!(first.rows[5], vec![Button::new("Next »", "page:next")]);

        ctx.page = 1;
        let last = results_menu(&ctx, 5);
        assert!(last.text.ends_with("Page 2/2"));
        assert_eq!(last.rows.len(), 3);
        assert_eq!(last.rows[2], vec![Button::new("« Prev", "page:prev")]);
    }

    #[test]
    fn test_single_page_has_no_navigation() {
        let menu = results_menu(&context(2), 5);
        assert_eq!(menu.rows.len(), 2);
        assert!(menu.buttons().all(|b| b.data.starts_with("group:")));
    }

    #[test]
    fn test_group_menu() {
        let group = BuildingGroup {
            building: "Marina Tower".to_string(),
            records: vec![record(4, 5_000_000.0, "Marina Tower"), record(9, 6_500_000.0, "Marina Tower")],
        };
        let menu = group_menu(&group, "k1", 0, 5);
        assert_eq!(menu.text, "Marina Tower: 2 units");
        assert_eq!(menu.rows.len(), 3);
        assert_eq!(menu.rows[0][0], Button::new("2 bd, 5,000,000 AED", "item:4"));
        assert_eq!(menu.rows[1][0].data, "item:9");
        assert_eq!(menu.rows[2][0].data, "back:groups");
    }

    #[test]
    fn test_large_group_menu_is_paged() {
        let group = BuildingGroup {
            building: "Marina Tower".to_string(),
            records: (1..=12)
                .map(|id| record(id, 1_000_000.0 * id as f64, "Marina Tower"))
                .collect(),
        };

        let first = group_menu(&group, "k1", 0, 5);
        assert_eq!(first.text, "Marina Tower: 12 units\n\nPage 1/3");
        assert_eq!(first.rows.len(), 7);
        assert_eq!(first.rows[0][0].data, "item:1");
        assert_eq!(first.rows[4][0].data, "item:5");
        assert_eq!(first.rows[5], vec![Button::new("Next »", "units:next:k1")]);
        assert_eq!(first.rows[6][0].data, "back:groups");

        let middle = group_menu(&group, "k1", 1, 5);
        assert_eq!(
            middle.rows[5],
            vec![
                Button::new("« Prev", "units:prev:k1"),
                Button::new("Next »", "units:next:k1")
            ]
        );

        let last = group_menu(&group, "k1", 2, 5);
        assert!(last.text.ends_with("Page 3/3"));
        assert_eq!(last.rows.len(), 4);
        assert_eq!(last.rows[0][0].data, "item:11");
        assert_eq!(last.rows[2], vec![Button::new("« Prev", "units:prev:k1")]);
    }

    #[test]
    fn test_format_property_info() {
        let info = format_property_info(&record(12, 5_400_000.0, "Marina Tower"));
        assert_eq!(
            info,
            "ID: 12, 2 bedrooms, 2 bathrooms, 1,250 sqft, Price: 5,400,000 AED, View: Sea, Status: Ready"
        );

        let bare = PropertyRecord {
            beds: None,
            baths: None,
            sqft: None,
            view: None,
            completion: None,
            ..record(1, 900.0, "X")
        };
        assert_eq!(
            format_property_info(&bare),
            "ID: 1, n/a bedrooms, n/a bathrooms, n/a sqft, Price: 900 AED"
        );
    }

    #[test]
    fn test_unit_menu_links_agent() {
        let menu = unit_menu(&record(12, 5_400_000.0, "Marina Tower"), "k1");
        assert!(menu.text.contains("Agent: Alice"));
        assert!(menu.text.contains("WhatsApp: https://wa.me/971500000001?text=Hello"));
        assert_eq!(menu.rows, vec![vec![Button::new("« Back to building", "back:group:k1")]]);
    }

    #[test]
    fn test_whatsapp_link() {
        let link = whatsapp_link("+971500000001", "Hi there").unwrap();
        assert!(link.starts_with("https://wa.me/971500000001?text="));
        let url = reqwest::Url::parse(&link).unwrap();
        let text: Vec<_> = url.query_pairs().collect();
        assert_eq!(text[0].1, "Hi there");

        assert_eq!(whatsapp_link("n/a", "Hi"), None);
    }
}
