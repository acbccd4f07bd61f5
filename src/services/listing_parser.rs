use scraper::{ElementRef, Html, Selector};

use crate::domain::{ListingParse, PaginationState};

/// Parse one leaderboard page into its usernames and continuation signal.
///
/// Missing substructure (no `table#channels`, no `tbody`) degrades to
/// `NoListing`; a row without a qualifying link contributes nothing. Nothing
/// in here raises.
pub fn parse_listing(html: &str) -> ListingParse {
    let document = Html::parse_document(html);

    let table_selector = Selector::parse("table#channels").unwrap();
    let tbody_selector = Selector::parse("tbody").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let table = match document.select(&table_selector).next() {
        Some(table) => table,
        None => return ListingParse::NoListing,
    };
    let tbody = match table.select(&tbody_selector).next() {
        Some(tbody) => tbody,
        None => return ListingParse::NoListing,
    };

    let mut row_count = 0;
    let mut usernames = Vec::new();

    for row in tbody.select(&row_selector) {
        row_count += 1;
        if let Some(username) = row_username(row, &link_selector) {
            usernames.push(username);
        }
    }

    ListingParse::Listing {
        usernames,
        row_count,
        pagination: pagination_state(&document),
    }
}

/// The username link is the first anchor in the row with non-empty visible
/// text and a local-path href. Rows lead with an image anchor pointing at an
/// absolute CDN URL, which the path check rejects.
///
/// This is a heuristic coupled to the source site's markup; keep it in this
/// one function.
fn row_username(row: ElementRef, link_selector: &Selector) -> Option<String> {
    row.select(link_selector).find_map(|link| {
        let href = link.value().attr("href")?;
        let text = link.text().collect::<String>().trim().to_string();

        if !text.is_empty() && href.starts_with('/') {
            Some(text)
        } else {
            None
        }
    })
}

/// Mirrors the site's pagination widget: the next control is an `a` reading
/// "Next", falling back to `li.next`; either missing or class `disabled`
/// means the listing is exhausted.
fn pagination_state(document: &Html) -> PaginationState {
    let pagination_selector = Selector::parse("ul.pagination").unwrap();
    let link_selector = Selector::parse("a").unwrap();
    let next_item_selector = Selector::parse("li.next").unwrap();

    let pagination = match document.select(&pagination_selector).next() {
        Some(pagination) => pagination,
        None => return PaginationState::Absent,
    };

    let next_control = pagination
        .select(&link_selector)
        .find(|link| link.text().collect::<String>().trim() == "Next")
        .or_else(|| pagination.select(&next_item_selector).next());

    match next_control {
        Some(control) => {
            if control.value().classes().any(|class| class == "disabled") {
                PaginationState::NextExhausted
            } else {
                PaginationState::NextAvailable
            }
        }
        None => PaginationState::NextExhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_listing;
    use crate::domain::{ListingParse, PaginationState};

    fn page(rows: &str, after_table: &str) -> String {
        format!(
            r#"<html><body>
            <table id="channels"><tbody>{}</tbody></table>
            {}
            </body></html>"#,
            rows, after_table
        )
    }

    #[test]
    fn page_without_the_channels_table_has_no_listing() {
        let html = "<html><body><table id=\"other\"><tbody></tbody></table></body></html>";
        assert_eq!(parse_listing(html), ListingParse::NoListing);
    }

    #[test]
    fn table_without_a_tbody_has_no_listing() {
        let html = "<html><body><table id=\"channels\"></table></body></html>";
        assert_eq!(parse_listing(html), ListingParse::NoListing);
    }

    #[test]
    fn skips_the_leading_image_link_and_takes_the_channel_link() {
        let rows = r#"
            <tr>
                <td><a href="https://cdn.example.com/kai.png"><img src="x"></a></td>
                <td><a href="/kaicenat">KaiCenat</a></td>
            </tr>"#;
        let html = page(rows, "");

        match parse_listing(&html) {
            ListingParse::Listing { usernames, row_count, .. } => {
                assert_eq!(usernames, vec!["KaiCenat"]);
                assert_eq!(row_count, 1);
            }
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn skips_links_with_empty_text() {
        let rows = r#"
            <tr>
                <td><a href="/kaicenat">   </a></td>
                <td><a href="/kaicenat">KaiCenat</a></td>
            </tr>"#;
        let html = page(rows, "");

        match parse_listing(&html) {
            ListingParse::Listing { usernames, .. } => assert_eq!(usernames, vec!["KaiCenat"]),
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn row_without_a_qualifying_link_contributes_nothing() {
        let rows = r#"
            <tr><td><a href="https://cdn.example.com/a.png">external</a></td></tr>
            <tr><td><a href="/ninja">Ninja</a></td></tr>"#;
        let html = page(rows, "");

        match parse_listing(&html) {
            ListingParse::Listing { usernames, row_count, .. } => {
                assert_eq!(usernames, vec!["Ninja"]);
                assert_eq!(row_count, 2);
            }
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn empty_tbody_yields_zero_rows() {
        let html = page("", "");

        match parse_listing(&html) {
            ListingParse::Listing { usernames, row_count, .. } => {
                assert!(usernames.is_empty());
                assert_eq!(row_count, 0);
            }
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn pagination_absent_when_no_control_on_page() {
        let html = page(r#"<tr><td><a href="/ninja">Ninja</a></td></tr>"#, "");

        match parse_listing(&html) {
            ListingParse::Listing { pagination, .. } => {
                assert_eq!(pagination, PaginationState::Absent)
            }
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn next_link_means_more_pages() {
        let widget = r#"<ul class="pagination"><li><a href="?page=2">Next</a></li></ul>"#;
        let html = page(r#"<tr><td><a href="/ninja">Ninja</a></td></tr>"#, widget);

        match parse_listing(&html) {
            ListingParse::Listing { pagination, .. } => {
                assert_eq!(pagination, PaginationState::NextAvailable)
            }
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn disabled_next_link_means_exhausted() {
        let widget =
            r##"<ul class="pagination"><li><a class="disabled" href="#">Next</a></li></ul>"##;
        let html = page(r#"<tr><td><a href="/ninja">Ninja</a></td></tr>"#, widget);

        match parse_listing(&html) {
            ListingParse::Listing { pagination, .. } => {
                assert_eq!(pagination, PaginationState::NextExhausted)
            }
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn falls_back_to_the_li_next_item() {
        let widget = r#"<ul class="pagination"><li class="next"><a href="?page=2">&raquo;</a></li></ul>"#;
        let html = page(r#"<tr><td><a href="/ninja">Ninja</a></td></tr>"#, widget);

        match parse_listing(&html) {
            ListingParse::Listing { pagination, .. } => {
                assert_eq!(pagination, PaginationState::NextAvailable)
            }
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn pagination_without_any_next_control_means_exhausted() {
        let widget = r#"<ul class="pagination"><li><a href="?page=1">1</a></li></ul>"#;
        let html = page(r#"<tr><td><a href="/ninja">Ninja</a></td></tr>"#, widget);

        match parse_listing(&html) {
            ListingParse::Listing { pagination, .. } => {
                assert_eq!(pagination, PaginationState::NextExhausted)
            }
            other => panic!("expected a listing, got {:?}", other),
        }
    }
}
