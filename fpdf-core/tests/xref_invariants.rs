//! Cross-reference table invariants over arbitrary drawing sequences
//!
//! Every generated file must have one xref entry per object, each entry
//! must point at the matching `N 0 obj` header, and every indirect
//! reference must resolve to a written object.

mod common;

use common::*;
use fpdf::{DrawOptions, LineCap, LineJoin, TextOptions, WindingRule};
use proptest::prelude::*;

fn check_xref(pdf: &[u8]) {
    let offsets = xref_offsets(pdf);
    let max = *offsets.keys().max().unwrap();
    assert_eq!(offsets.len() as u32, max);
    assert_eq!(offsets.keys().copied().collect::<Vec<_>>(), (1..=max).collect::<Vec<_>>());

    for (number, offset) in &offsets {
        let header = format!("{number} 0 obj\n");
        assert!(
            pdf[*offset..].starts_with(header.as_bytes()),
            "xref entry for object {number} points at offset {offset}"
        );
    }

    for reference in all_references(pdf) {
        assert!(offsets.contains_key(&reference), "dangling {reference} 0 R");
    }

    let trailer = as_text(pdf);
    assert!(trailer.contains(&format!("/Size {}", max + 1)));
}

#[test]
fn test_minimal_document_xref() {
    let mut doc = pinned_document();
    let pdf = doc.final_buffer().unwrap().to_vec();
    check_xref(&pdf);

    // page, content, pages root, resources, info, catalog
    assert_eq!(xref_offsets(&pdf).len(), 6);
}

#[test]
fn test_xref_with_fonts() {
    let mut doc = pinned_document();
    doc.add_page(None).unwrap();
    doc.add_custom_font("OpenSans", "", test_truetype_font())
        .unwrap();
    doc.set_font("opensans", "", Some(12.0)).unwrap();
    doc.text(0.0, 0.0, "Hello", TextOptions::default()).unwrap();
    doc.set_font("Helvetica", "BI", Some(12.0)).unwrap();
    doc.text(0.0, 20.0, "World", TextOptions::default()).unwrap();
    doc.add_page(Some("a4")).unwrap();
    let pdf = doc.final_buffer().unwrap().to_vec();

    check_xref(&pdf);
    let resources = object_text(&pdf, 2);
    assert!(resources.contains("/F1 "));
    assert!(resources.contains("/F2 "));
    assert_eq!(objects_containing(&pdf, "/BaseFont /Helvetica-BoldOblique").len(), 1);
}

#[test]
fn test_unused_truetype_font_still_resolves() {
    let mut doc = pinned_document();
    doc.add_page(None).unwrap();
    doc.add_custom_font("OpenSans", "", test_truetype_font())
        .unwrap();
    let pdf = doc.final_buffer().unwrap().to_vec();

    check_xref(&pdf);
    let descendant = objects_containing(&pdf, "/Subtype /CIDFontType2");
    assert!(object_text(&pdf, descendant[0]).contains("/W []"));
}

#[derive(Debug, Clone)]
enum Op {
    Page,
    Rect(f64, f64, f64, f64),
    Circle(f64, f64, f64),
    Line(f64, f64, f64, f64),
    Text(String),
    Font(&'static str, &'static str),
    Embedded,
    Save,
    Restore,
    Rotate(f64),
    Style,
}

fn coordinate() -> impl Strategy<Value = f64> {
    -50.0..700.0f64
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Page),
        (coordinate(), coordinate(), 0.0..200.0f64, 0.0..200.0f64)
            .prop_map(|(x, y, w, h)| Op::Rect(x, y, w, h)),
        (coordinate(), coordinate(), 0.0..100.0f64).prop_map(|(x, y, r)| Op::Circle(x, y, r)),
        (coordinate(), coordinate(), coordinate(), coordinate())
            .prop_map(|(a, b, c, d)| Op::Line(a, b, c, d)),
        "[ -~\u{e0}-\u{ff}\u{4e00}]{0,12}".prop_map(Op::Text),
        prop_oneof![
            Just(("Helvetica", "")),
            Just(("Times", "B")),
            Just(("Courier", "I")),
            Just(("Times", "IB")),
        ]
        .prop_map(|(family, style)| Op::Font(family, style)),
        Just(Op::Embedded),
        Just(Op::Save),
        Just(Op::Restore),
        (-360.0..360.0f64).prop_map(Op::Rotate),
        Just(Op::Style),
    ]
}

fn apply(doc: &mut fpdf::Document, op: &Op) {
    if doc.page_count() == 0 && !matches!(op, Op::Font(..) | Op::Embedded) {
        doc.add_page(None).unwrap();
    }
    match op {
        Op::Page => doc.add_page(None).unwrap(),
        Op::Rect(x, y, w, h) => doc.draw_rect(*x, *y, *w, *h, DrawOptions::stroke()).unwrap(),
        Op::Circle(x, y, r) => {
            doc.circle(*x, *y, *r).unwrap();
            doc.fill(WindingRule::EvenOdd).unwrap();
        }
        Op::Line(x1, y1, x2, y2) => {
            doc.move_to(*x1, *y1).unwrap();
            doc.line_to(*x2, *y2).unwrap();
            doc.stroke().unwrap();
        }
        Op::Text(text) => {
            // Without a selected font text must fail cleanly
            let result = doc.text(10.0, 10.0, text, TextOptions::default());
            assert_eq!(result.is_ok(), doc.current_font_metrics().is_ok());
        }
        Op::Font(family, style) => doc.set_font(family, style, Some(11.0)).unwrap(),
        Op::Embedded => {
            doc.add_custom_font("Open Sans", "", test_truetype_font())
                .unwrap();
            doc.set_font("Open Sans", "", None).unwrap();
        }
        Op::Save => doc.save().unwrap(),
        Op::Restore => doc.restore().unwrap(),
        Op::Rotate(degrees) => doc.rotate(*degrees, Some((100.0, 100.0))).unwrap(),
        Op::Style => {
            doc.line_cap(LineCap::Round).unwrap();
            doc.line_join(LineJoin::Bevel).unwrap();
            doc.line_width(1.5).unwrap();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_xref_is_complete(ops in prop::collection::vec(op_strategy(), 0..24)) {
        let mut doc = pinned_document();
        for op in &ops {
            apply(&mut doc, op);
        }
        let pdf = doc.final_buffer().unwrap().to_vec();
        check_xref(&pdf);
        prop_assert!(pdf.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn prop_page_count_matches_tree(pages in 1usize..8) {
        let mut doc = pinned_document();
        for _ in 0..pages {
            doc.add_page(None).unwrap();
        }
        let pdf = doc.final_buffer().unwrap().to_vec();
        let root = object_text(&pdf, 1);
        let count = format!("/Count {pages}");
        prop_assert!(root.contains(&count));
        prop_assert_eq!(objects_containing(&pdf, "/Type /Page ").len(), pages);
    }
}
