use std::sync::LazyLock;

use labgraph::{Building, Campus, Distance, LabeledGraph, Point, Segment, campus_graph};

pub static CAMPUS_GRAPH: LazyLock<LabeledGraph<Point, Distance>> =
    LazyLock::new(|| campus_graph(walkways()).unwrap());

pub static CAMPUS: LazyLock<Campus> = LazyLock::new(|| Campus::new(buildings(), walkways()).unwrap());

pub const LIB: Point = Point::new(0.0, 0.0);
pub const CSE: Point = Point::new(4.0, 3.0);
pub const HUB: Point = Point::new(8.0, 0.0);
pub const GYM: Point = Point::new(8.0, 6.0);
pub const DORM: Point = Point::new(12.0, 3.0);
pub const LAB: Point = Point::new(4.0, 10.0);
pub const POND: Point = Point::new(20.0, 20.0);
pub const SHED: Point = Point::new(30.0, 30.0);

//              LAB
//               |
//        CSE - GYM
//       /   \   | \
//    LIB --- HUB - DORM --- POND
fn walkways() -> Vec<Segment> {
    let two_ways = [
        (LIB, CSE),
        (CSE, HUB),
        (LIB, HUB),
        (CSE, GYM),
        (HUB, GYM),
        (HUB, DORM),
        (GYM, DORM),
    ];

    // one way only: nothing leads back to LAB or POND
    let one_way = [(LAB, GYM), (POND, DORM)];

    two_ways
        .into_iter()
        .flat_map(|(a, b)| [(a, b), (b, a)])
        .chain(one_way)
        .map(|(from, to)| Segment {
            from,
            to,
            distance: from.distance_to(&to),
        })
        .collect()
}

fn buildings() -> Vec<Building> {
    [
        ("LIB", "Suzzallo Library", LIB),
        ("CSE", "Paul G. Allen Center for Computer Science & Engineering", CSE),
        ("HUB", "Husky Union Building", HUB),
        ("GYM", "Intramural Activities Building", GYM),
        ("DORM", "Lander Hall", DORM),
        ("LAB", "Physics/Astronomy Building", LAB),
        // no walkway reaches the shed
        ("SHED", "Grounds Storage", SHED),
    ]
    .into_iter()
    .map(|(short_name, long_name, location)| Building {
        short_name: short_name.to_string(),
        long_name: long_name.to_string(),
        location,
    })
    .collect()
}
