use std::io::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;
use termcolor::Color;
use tracing::warn;

use sharedstreets_core::batch::{hash_feature, Feature, HashedFeature};
use sharedstreets_core::config::LimitsConfig;
use sharedstreets_core::model::{Coordinate, FormOfWay, LocationReference};

use crate::output;

struct Fixture {
    name: &'static str,
    feature: Feature,
    expected: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FixtureOut {
    pub name: String,
    pub ok: bool,
    pub expected: String,
    #[serde(flatten)]
    pub result: HashedFeature,
}

fn geometry(points: &[(f64, f64)]) -> Feature {
    Feature::Geometry {
        coordinates: points.iter().copied().map(Coordinate::from).collect(),
    }
}

fn intersection(lon: f64, lat: f64) -> Feature {
    Feature::Intersection {
        coordinates: Coordinate::new(lon, lat),
    }
}

fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "intersection-1",
            feature: intersection(110.0, 45.0),
            expected: "F585H3jn72yicbJhf4791w",
        },
        Fixture {
            name: "intersection-2",
            feature: intersection(-74.003388, 40.634538),
            expected: "31H4rsFQijyBvkTSfoRYKP",
        },
        Fixture {
            name: "intersection-3",
            feature: intersection(-74.004107, 40.63406),
            expected: "2su5qcfh1QgXkTLXcMGbU9",
        },
        Fixture {
            name: "geometry-1",
            feature: geometry(&[(110.0, 45.0), (115.0, 50.0), (120.0, 55.0)]),
            expected: "SWkr931VN89aHemb4L7MDS",
        },
        Fixture {
            name: "geometry-2",
            feature: geometry(&[
                (-74.007568359375, 40.75239562988281),
                (-74.00729370117188, 40.753089904785156),
            ]),
            expected: "L6UL4SQSnKAM7vU1HpLGG",
        },
        Fixture {
            name: "geometry-3",
            feature: geometry(&[
                (-74.00778198242188, 40.72457504272461),
                (-74.0076675415039, 40.72519302368164),
            ]),
            expected: "Bx91v4fCvcMFiwd2Mrptio",
        },
        Fixture {
            name: "reference-1",
            feature: Feature::Reference {
                form_of_way: FormOfWay::MultipleCarriageway,
                location_references: vec![
                    LocationReference::new((-74.0048213, 40.7416415)).with_outbound(208.0, 9279.0),
                    LocationReference::new((-74.0051265, 40.7408505)).with_inbound(188.0),
                ],
            },
            expected: "WXejTYQvo2H5CJ8ZtsiapE",
        },
    ]
}

pub fn run() -> Result<()> {
    let limits = LimitsConfig::default();
    let mut results = Vec::new();
    for f in fixtures() {
        let result = hash_feature(&f.feature, &limits)?;
        let ok = result.id.as_str() == f.expected;
        if !ok {
            warn!(name = f.name, expected = f.expected, got = %result.id, "fixture mismatch");
        }
        results.push(FixtureOut {
            name: f.name.to_string(),
            ok,
            expected: f.expected.to_string(),
            result,
        });
    }

    if output::is_json() {
        output::print(&results)?;
    } else {
        let mut out = output::stdout();
        for r in &results {
            let (label, color) = if r.ok { ("ok", Color::Green) } else { ("MISMATCH", Color::Red) };
            output::write_label(&mut out, label, color)?;
            writeln!(out, "{:<16}{}  {}", r.name, r.result.id, r.result.message)?;
        }
    }

    let failed = results.iter().filter(|r| !r.ok).count();
    if failed > 0 {
        return Err(anyhow!("{failed} fixture(s) did not match"));
    }
    Ok(())
}
