//! Road network of mainland Portugal.

use searcher::Cost;

/// Roads between cities, with their length in kilometers.
pub(crate) const ROADS: &[(&str, &str, Cost)] = &[
    ("Coimbra", "Leiria", 73.0),
    ("Aveiro", "Agueda", 35.0),
    ("Porto", "Agueda", 79.0),
    ("Agueda", "Coimbra", 45.0),
    ("Viseu", "Agueda", 78.0),
    ("Aveiro", "Porto", 78.0),
    ("Aveiro", "Coimbra", 65.0),
    ("Figueira", "Aveiro", 77.0),
    ("Braga", "Porto", 57.0),
    ("Viseu", "Guarda", 75.0),
    ("Viseu", "Coimbra", 91.0),
    ("Figueira", "Coimbra", 52.0),
    ("Leiria", "Castelo Branco", 169.0),
    ("Figueira", "Leiria", 62.0),
    ("Leiria", "Santarem", 78.0),
    ("Santarem", "Lisboa", 82.0),
    ("Santarem", "Castelo Branco", 160.0),
    ("Castelo Branco", "Viseu", 174.0),
    ("Santarem", "Evora", 122.0),
    ("Lisboa", "Evora", 132.0),
    ("Evora", "Beja", 105.0),
    ("Lisboa", "Beja", 178.0),
    ("Faro", "Beja", 147.0),
    ("Braga", "Guimaraes", 25.0),
    ("Porto", "Guimaraes", 44.0),
    ("Guarda", "Covilha", 46.0),
    ("Viseu", "Covilha", 57.0),
    ("Castelo Branco", "Covilha", 62.0),
    ("Guarda", "Castelo Branco", 96.0),
    ("Lamego", "Guimaraes", 88.0),
    ("Lamego", "Viseu", 47.0),
    ("Lamego", "Guarda", 64.0),
    ("Portalegre", "Castelo Branco", 64.0),
    ("Portalegre", "Santarem", 157.0),
    ("Portalegre", "Evora", 194.0),
];

/// Map coordinates of each city.
pub(crate) const COORDINATES: &[(&str, f64, f64)] = &[
    ("Aveiro", 41.0, 215.0),
    ("Figueira", 24.0, 161.0),
    ("Coimbra", 60.0, 167.0),
    ("Agueda", 58.0, 208.0),
    ("Viseu", 104.0, 217.0),
    ("Braga", 61.0, 317.0),
    ("Porto", 45.0, 272.0),
    ("Lisboa", 0.0, 0.0),
    ("Santarem", 38.0, 59.0),
    ("Leiria", 28.0, 115.0),
    ("Castelo Branco", 140.0, 124.0),
    ("Guarda", 159.0, 204.0),
    ("Evora", 120.0, -10.0),
    ("Beja", 125.0, -110.0),
    ("Faro", 120.0, -250.0),
    ("Guimaraes", 71.0, 300.0),
    ("Covilha", 130.0, 175.0),
    ("Lamego", 125.0, 250.0),
    ("Portalegre", 130.0, 170.0),
];
