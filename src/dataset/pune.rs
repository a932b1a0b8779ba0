use crate::{dataset::Segment, network::Line};

const SEGMENTS: &[(&str, &str, f64, Line)] = &[
    ("PCMC Bhavan", "Sant Tukaram Nagar", 3.3, Line::Purple),
    ("Sant Tukaram Nagar", "Nashik Phata", 2.0, Line::Purple),
    ("Nashik Phata", "Kasarwadi", 1.8, Line::Purple),
    ("Kasarwadi", "Phugewadi", 1.2, Line::Purple),
    ("Phugewadi", "Dapodi", 1.5, Line::Purple),
    ("Dapodi", "Bopodi", 1.4, Line::Purple),
    ("Bopodi", "Khadki", 1.3, Line::Purple),
    ("Khadki", "Range Hills", 1.2, Line::Purple),
    ("Range Hills", "Shivaji Nagar", 2.8, Line::Purple),
    ("Shivaji Nagar", "Civil Court", 1.4, Line::Purple),
    ("Civil Court", "Kasba Peth", 1.2, Line::Purple),
    ("Kasba Peth", "Mandai", 1.0, Line::Purple),
    ("Mandai", "Swargate", 1.5, Line::Purple),
    ("Vanaz", "Anand Nagar", 1.0, Line::Aqua),
    ("Anand Nagar", "Ideal Colony", 1.1, Line::Aqua),
    ("Ideal Colony", "Nal Stop", 1.2, Line::Aqua),
    ("Nal Stop", "Garware College", 1.4, Line::Aqua),
    ("Garware College", "Deccan Gymkhana", 1.0, Line::Aqua),
    ("Deccan Gymkhana", "Chhatrapati Sambhaji Udyan", 0.9, Line::Aqua),
    ("Chhatrapati Sambhaji Udyan", "PMC Bhavan", 0.8, Line::Aqua),
    ("PMC Bhavan", "Civil Court", 1.1, Line::Aqua),
    ("Civil Court", "Mangalwar Peth", 1.0, Line::Aqua),
    ("Mangalwar Peth", "Pune Railway Station", 1.2, Line::Aqua),
    ("Pune Railway Station", "Ruby Hall Clinic", 1.0, Line::Aqua),
    ("Ruby Hall Clinic", "Bund Garden", 1.1, Line::Aqua),
    ("Bund Garden", "Yerawada", 1.0, Line::Aqua),
    ("Yerawada", "Kalyani Nagar", 0.9, Line::Aqua),
    ("Kalyani Nagar", "Ramwadi", 1.2, Line::Aqua),
    ("Megapolis Circle", "Quadron", 1.5, Line::Red),
    ("Quadron", "Infosys Phase II", 1.8, Line::Red),
    ("Infosys Phase II", "Dollar", 1.3, Line::Red),
    ("Dollar", "RBI", 1.2, Line::Red),
    ("RBI", "Rajiv Gandhi IT Park", 1.4, Line::Red),
    ("Rajiv Gandhi IT Park", "EON IT Park", 1.1, Line::Red),
    ("EON IT Park", "Kamnagar", 1.6, Line::Red),
    ("Kamnagar", "Laxmi Nagar", 1.3, Line::Red),
    ("Laxmi Nagar", "Balewadi Phata", 1.2, Line::Red),
    ("Balewadi Phata", "Baner Gaon", 1.4, Line::Red),
    ("Baner Gaon", "Baner", 1.0, Line::Red),
    ("Baner", "Indian Agricultural Research Institute", 1.5, Line::Red),
    ("Indian Agricultural Research Institute", "Sakal Nagar", 1.3, Line::Red),
    ("Sakal Nagar", "Savitribai Phule Pune University", 1.1, Line::Red),
    (
        "Savitribai Phule Pune University",
        "Reserve Bank of India",
        1.2,
        Line::Red,
    ),
    ("Reserve Bank of India", "Agriculture College", 1.4, Line::Red),
    ("Agriculture College", "Shivaji Nagar", 1.6, Line::Red),
    ("Shivaji Nagar", "Civil Court", 1.4, Line::Red),
];

/// The Pune Metro network: Purple, Aqua and Red lines meeting at Civil
/// Court and Shivaji Nagar.
pub fn pune() -> Vec<Segment> {
    SEGMENTS
        .iter()
        .map(|(from, to, distance_km, line)| Segment {
            from: (*from).to_string(),
            to: (*to).to_string(),
            distance_km: *distance_km,
            line: *line,
        })
        .collect()
}
