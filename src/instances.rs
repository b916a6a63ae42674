//! Reference instances for tests and benchmarks.
//!
//! [`djibouti`] is the 38-city Djibouti set from the University of Waterloo
//! national TSP collection (optimal tour length 6656). [`lettered`] is a small
//! 26-city instance named `A` through `Z`; `A` and `U` share a location.

use crate::geometry::City;
use crate::problem::TspProblem;

const DJIBOUTI: [(&str, f64, f64); 38] = [
    ("1", 11003.611100, 42102.500000),
    ("2", 11108.611100, 42373.888900),
    ("3", 11133.333300, 42885.833300),
    ("4", 11155.833300, 42712.500000),
    ("5", 11183.333300, 42933.333300),
    ("6", 11297.500000, 42853.333300),
    ("7", 11310.277800, 42929.444400),
    ("8", 11416.666700, 42983.333300),
    ("9", 11423.888900, 43000.277800),
    ("10", 11438.333300, 42057.222200),
    ("11", 11461.111100, 43252.777800),
    ("12", 11485.555600, 43187.222200),
    ("13", 11503.055600, 42855.277800),
    ("14", 11511.388900, 42106.388900),
    ("15", 11522.222200, 42841.944400),
    ("16", 11569.444400, 43136.666700),
    ("17", 11583.333300, 43150.000000),
    ("18", 11595.000000, 43148.055600),
    ("19", 11600.000000, 43150.000000),
    ("20", 11690.555600, 42686.666700),
    ("21", 11715.833300, 41836.111100),
    ("22", 11751.111100, 42814.444400),
    ("23", 11770.277800, 42651.944400),
    ("24", 11785.277800, 42884.444400),
    ("25", 11822.777800, 42673.611100),
    ("26", 11846.944400, 42660.555600),
    ("27", 11963.055600, 43290.555600),
    ("28", 11973.055600, 43026.111100),
    ("29", 12058.333300, 42195.555600),
    ("30", 12149.444400, 42477.500000),
    ("31", 12286.944400, 43355.555600),
    ("32", 12300.000000, 42433.333300),
    ("33", 12355.833300, 43156.388900),
    ("34", 12363.333300, 43189.166700),
    ("35", 12372.777800, 42711.388900),
    ("36", 12386.666700, 43334.722200),
    ("37", 12421.666700, 42895.555600),
    ("38", 12645.000000, 42973.333300),
];

const LETTERED: [(&str, f64, f64); 26] = [
    ("A", 20.000000, 30.000000),
    ("B", 25.000000, 65.000000),
    ("C", 60.000000, 130.000000),
    ("D", 190.000000, 10.000000),
    ("E", 150.000000, 150.000000),
    ("F", 5.000000, 105.000000),
    ("G", 75.000000, 15.000000),
    ("H", 120.000000, 130.000000),
    ("I", 40.000000, 85.000000),
    ("J", 30.000000, 60.000000),
    ("K", 50.000000, 30.000000),
    ("L", 105.000000, 15.000000),
    ("M", 80.000000, 135.000000),
    ("N", 90.000000, 180.000000),
    ("O", 140.000000, 155.000000),
    ("P", 115.000000, 115.000000),
    ("Q", 70.000000, 160.000000),
    ("R", 10.000000, 70.000000),
    ("S", 25.000000, 75.000000),
    ("T", 185.000000, 20.000000),
    ("U", 20.000000, 30.000000),
    ("V", 175.000000, 195.000000),
    ("W", 120.000000, 110.000000),
    ("X", 90.000000, 140.000000),
    ("Y", 15.000000, 100.000000),
    ("Z", 195.000000, 45.000000),
];

fn build(points: &[(&str, f64, f64)]) -> TspProblem {
    let mut problem = TspProblem::new(points.len());
    for &(name, x, y) in points {
        problem
            .add_city(name, x, y)
            .expect("reference instance cities are unique and finite");
    }
    problem
}

/// The 38-city Djibouti instance.
pub fn djibouti() -> TspProblem {
    build(&DJIBOUTI)
}

/// The 26-city lettered instance.
pub fn lettered() -> TspProblem {
    build(&LETTERED)
}

/// Cities of the 38-city Djibouti instance.
pub fn djibouti_cities() -> Vec<City> {
    DJIBOUTI
        .iter()
        .map(|&(name, x, y)| City::new(name, x, y))
        .collect()
}
