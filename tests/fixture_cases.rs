//! Checks similarity and template location against hand-computed cases.
//!
//! Cases live in `tests/data/cases.json`; every expected score was derived
//! from the luminance and closeness formulas by hand.

use pixmatch::{locate_template, similarity, PixelMatrix, Point, Rgba};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct PixelSet {
    x: usize,
    y: usize,
    rgba: [u8; 4],
}

#[derive(Debug, Deserialize)]
struct ImageFixture {
    width: usize,
    height: usize,
    #[serde(default)]
    fill: [u8; 4],
    #[serde(default)]
    set: Vec<PixelSet>,
}

impl ImageFixture {
    fn build(&self) -> PixelMatrix {
        let mut m = PixelMatrix::from_fn(self.width, self.height, |_| Rgba::from(self.fill))
            .expect("valid fixture geometry");
        for px in &self.set {
            m.set(px.x, px.y, Rgba::from(px.rgba));
        }
        m
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Case {
    Similarity {
        name: String,
        a: ImageFixture,
        b: ImageFixture,
        expected: u32,
    },
    Locate {
        name: String,
        image: ImageFixture,
        template: ImageFixture,
        x: usize,
        y: usize,
        score: u32,
    },
}

#[derive(Debug, Deserialize)]
struct Fixture {
    cases: Vec<Case>,
}

fn load_fixture() -> Fixture {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/cases.json");
    let text = fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&text).expect("Failed to parse fixture")
}

#[test]
fn fixture_cases_match_expected_scores() {
    let fixture = load_fixture();
    assert!(!fixture.cases.is_empty());

    for case in &fixture.cases {
        match case {
            Case::Similarity {
                name,
                a,
                b,
                expected,
            } => {
                let (a, b) = (a.build(), b.build());
                assert_eq!(similarity(&a, &b).unwrap(), *expected, "case {name}");
                assert_eq!(similarity(&b, &a).unwrap(), *expected, "case {name} (swapped)");
            }
            Case::Locate {
                name,
                image,
                template,
                x,
                y,
                score,
            } => {
                let found = locate_template(&image.build(), &template.build()).unwrap();
                assert_eq!(found.offset, Point::new(*x, *y), "case {name}");
                assert_eq!(found.score, *score, "case {name}");
            }
        }
    }
}
