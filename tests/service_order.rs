//! End-to-end tests for bulletin parsing and the interchange document.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use chrono::NaiveDate;
use orderflow::order::{segment, to_interchange};
use orderflow::{parse_document_on, ParseWarning, ServiceDocument, SlideType};

const BULLETIN: &str = "Service Date: June 22, 2025
Theme:  Disciples Making Disciples
Speaker: Pastor Megan
~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
Order of Service
5 Minute Countdown (Regular)
Opening Praise:
And All The People Said Amen
Announcements
Children's Message
-Pastor Megan
Call to Worship
L: We are called to be God's children.
P: God's love has been poured on us through Jesus Christ!
L: Fear and doubt are gone!
P: Joy and Celebration ring in our hearts!
L: Come, let us raise our voices in song!
P: Let us offer our hearts and souls to God in prayer and praise. AMEN.
Opening Prayer:
Lord of Light and Mercy, be with us this day as we again hear the stories of faith and sight. Help us to believe in your abiding presence with us, both in our darkness and in the light which you bring. Give us courage and strength to witness to your resurrection. For we offer this in Jesus' Name, AMEN.
Hymn of Praise:
#399 Take My Life and Let it Be
Scripture: Acts 3:11-19
11 While the man held on to Peter and John, all the people were astonished and came running to them in the place called Solomon's Colonnade. 12 When Peter saw this, he said to them: \"Fellow Israelites, why does this surprise you? Why do you stare at us as if by our own power or godliness we had made this man walk?
Sermon:
Pastor Megan
Holy Communion
Lord's Prayer
Prayers for the Community
Offering with Doxology
Closing Praise:
My Lighthouse
Dismissal
";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn parsed() -> ServiceDocument {
    let outcome = parse_document_on(BULLETIN, today());
    assert!(outcome.warnings.is_empty(), "unexpected warnings: {:?}", outcome.warnings);
    outcome.document
}

#[test]
fn document_fields() {
    let doc = parsed();
    assert_eq!(doc.date, "2025-06-22");
    assert_eq!(doc.theme, "Disciples Making Disciples");
    assert_eq!(doc.speaker.as_deref(), Some("Pastor Megan"));
}

#[test]
fn items_titles_and_types() {
    let doc = parsed();
    let got: Vec<(&str, SlideType)> = doc.items.iter().map(|i| (i.title.as_str(), i.slide_type)).collect();

    assert_eq!(
        got,
        vec![
            ("5 Minute Countdown (Regular)", SlideType::Countdown),
            ("Opening Praise", SlideType::Song),
            ("Announcements", SlideType::Text),
            ("Children's Message", SlideType::ChildrenMessage),
            ("Call to Worship", SlideType::Song),
            ("Opening Prayer", SlideType::Prayer),
            ("Hymn of Praise", SlideType::Hymn),
            ("Scripture: Acts 3:11-19", SlideType::Scripture),
            ("Sermon", SlideType::Sermon),
            ("Holy Communion", SlideType::Communion),
            ("Lord's Prayer", SlideType::Prayer),
            ("Prayers for the Community", SlideType::Prayer),
            ("Offering with Doxology", SlideType::Offering),
            ("Closing Praise", SlideType::Song),
            ("Dismissal", SlideType::Dismissal),
        ]
    );
}

#[test]
fn item_bodies_and_metadata() {
    let doc = parsed();
    let by_title = |t: &str| doc.items.iter().find(|i| i.title == t).unwrap();

    let children = by_title("Children's Message");
    assert_eq!(children.metadata.presenter.as_deref(), Some("Pastor Megan"));
    assert_eq!(children.content, "");

    assert_eq!(by_title("Announcements").content, "");
    assert_eq!(by_title("Opening Praise").content, "And All The People Said Amen");
    assert_eq!(by_title("Sermon").content, "Pastor Megan");
    assert_eq!(by_title("Closing Praise").content, "My Lighthouse");
    assert_eq!(by_title("Call to Worship").content.lines().count(), 6);

    let hymn = by_title("Hymn of Praise");
    assert_eq!(hymn.content, "#399 Take My Life and Let it Be");
    assert_eq!(hymn.hymn_number(), Some(399));

    let scripture = by_title("Scripture: Acts 3:11-19");
    assert_eq!(scripture.reference.as_deref(), Some("Acts 3:11-19"));
    assert!(scripture.content.starts_with("11 While the man"));
    let reference = scripture.scripture_ref().unwrap();
    assert_eq!((reference.book.as_str(), reference.chapter), ("Acts", 3));

    assert_eq!(doc.items[0].countdown_minutes(), Some(5));
}

#[test]
fn interchange_document_shape() {
    let yaml = to_interchange(&parsed());
    assert!(yaml.starts_with(
        "date: 2025-06-22\ntheme: Disciples Making Disciples\nspeaker: Pastor Megan\n\norder:\n  - type: countdown\n    title: 5 Minute Countdown (Regular)\n"
    ));
    assert!(yaml.contains(
        "  - type: children_message\n    title: Children's Message\n    presenter: Pastor Megan\n  - type: song\n    title: Call to Worship\n    content: |\n      L: We are called to be God's children.\n"
    ));
    assert!(yaml.contains(
        "  - type: scripture\n    title: \"Scripture: Acts 3:11-19\"\n    reference: Acts 3:11-19\n    content: |\n      11 While"
    ));
    assert!(yaml.contains("    title: Closing Praise\n    content: \"My Lighthouse\"\n"));
    assert!(yaml.ends_with("  - type: dismissal\n    title: Dismissal\n"));
}

#[test]
fn emitted_document_loads_back() {
    let doc = parsed();
    let loaded = ServiceDocument::from_yaml(&to_interchange(&doc)).unwrap();
    assert_eq!(loaded, doc);
}

/// Rebuild bulletin text from a loaded document: one `Title:` header per
/// item, its presenter line, then its content lines.
fn as_bulletin(doc: &ServiceDocument) -> String {
    let mut text = String::from("Order of Service\n");
    for item in &doc.items {
        text.push_str(&item.title);
        text.push_str(":\n");
        if let Some(presenter) = &item.metadata.presenter {
            text.push('-');
            text.push_str(presenter);
            text.push('\n');
        }
        if !item.content.is_empty() {
            text.push_str(&item.content);
            text.push('\n');
        }
    }
    text
}

#[test]
fn reserialized_content_segments_the_same() {
    let doc = parsed();
    let loaded = ServiceDocument::from_yaml(&to_interchange(&doc)).unwrap();
    let resegmented = parse_document_on(&as_bulletin(&loaded), today()).document;

    let before: Vec<_> = doc.items.iter().map(|i| (&i.title, &i.content, &i.metadata)).collect();
    let after: Vec<_> = resegmented.items.iter().map(|i| (&i.title, &i.content, &i.metadata)).collect();
    assert_eq!(before, after);
}

#[test]
fn no_marker_means_no_order() {
    let outcome = parse_document_on("Service Date: June 22, 2025\nOpening Prayer:\nAmen\n", today());
    assert!(outcome.document.items.is_empty());
    assert_eq!(outcome.warnings, vec![ParseWarning::MissingSection]);
    assert!(!outcome.has_order());
}

#[test]
fn header_after_header_keeps_empty_content() {
    let items = segment("Announcements\nOpening Prayer:\nGracious God, we come before you with open and grateful hearts.\n");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].content, "");
    let yaml = to_interchange(&parse_document_on(
        "Order of Service\nAnnouncements\nDismissal\n",
        today(),
    )
    .document);
    assert!(yaml.contains("    title: Announcements\n  - type: dismissal\n"));
}

#[test]
fn preamble_before_first_header_is_ignored() {
    let text = "Order of Service\nplease silence your phones\nwelcome, friends\nOpening Prayer:\nGracious God, we come before you with open and grateful hearts.\n";
    let doc = parse_document_on(text, today()).document;
    assert_eq!(doc.items.len(), 1);
    assert_eq!(doc.items[0].title, "Opening Prayer");
}

#[test]
fn separators_inside_order_are_dropped() {
    let text = "Order of Service\n=====\nOffering\n-----\n-Ushers\n~~~\nDismissal\n";
    let doc = parse_document_on(text, today()).document;
    assert_eq!(doc.items.len(), 2);
    assert_eq!(doc.items[0].metadata.presenter.as_deref(), Some("Ushers"));
    assert_eq!(doc.items[0].content, "");
}

#[test]
fn unicode_line_separator_in_title_survives_loading() {
    let text = "Order of Service\nOpening Prayer\nLord of Light and Mercy, be with us this day as we again hear the stories of faith.\nClosing Prayer\u{2028}Amen:\nGo in peace.\n";
    let doc = parse_document_on(text, today()).document;
    assert_eq!(doc.items[1].title, "Closing Prayer\u{2028}Amen");

    let yaml = to_interchange(&doc);
    assert!(yaml.contains("    title: \"Closing Prayer\\LAmen\"\n"));
    assert_eq!(ServiceDocument::from_yaml(&yaml).unwrap(), doc);
}
