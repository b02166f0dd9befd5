mod campus;
mod comics;

// every test binary only uses some of the fixtures
#[allow(unused_imports)]
pub use campus::{CAMPUS, CAMPUS_GRAPH, CSE, DORM, GYM, HUB, LAB, LIB, POND, SHED};
#[allow(unused_imports)]
pub use comics::{COMICS_GRAPH, ComicsGraph};
