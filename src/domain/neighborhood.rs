use std::fmt;

/// Neighborhoods the search API knows about, in the order the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Neighborhood {
    Castropol,
    LaLinde,
    SanLucas,
    Balsos,
    AvenidaPoblado,
    AvenidaLasVegas,
    LaCalera,
    TransversalInferior,
    TransversalSuperior,
    Campestre,
    Esmeraldal,
    Cumbres,
    Choco,
    Frontera,
    Zuniga,
    Benedictinos,
}

impl Neighborhood {
    pub const ALL: [Neighborhood; 16] = [
        Neighborhood::Castropol,
        Neighborhood::LaLinde,
        Neighborhood::SanLucas,
        Neighborhood::Balsos,
        Neighborhood::AvenidaPoblado,
        Neighborhood::AvenidaLasVegas,
        Neighborhood::LaCalera,
        Neighborhood::TransversalInferior,
        Neighborhood::TransversalSuperior,
        Neighborhood::Campestre,
        Neighborhood::Esmeraldal,
        Neighborhood::Cumbres,
        Neighborhood::Choco,
        Neighborhood::Frontera,
        Neighborhood::Zuniga,
        Neighborhood::Benedictinos,
    ];

    /// Label shown in the form. Also the exact value sent to the API.
    pub fn label(self) -> &'static str {
        match self {
            Neighborhood::Castropol => "Castropol",
            Neighborhood::LaLinde => "La Linde",
            Neighborhood::SanLucas => "San Lucas",
            Neighborhood::Balsos => "Balsos",
            Neighborhood::AvenidaPoblado => "Avenida Poblado",
            Neighborhood::AvenidaLasVegas => "Avenida Las Vegas",
            Neighborhood::LaCalera => "La Calera",
            Neighborhood::TransversalInferior => "Transversal Inferior",
            Neighborhood::TransversalSuperior => "Transversal Superior",
            Neighborhood::Campestre => "Campestre",
            Neighborhood::Esmeraldal => "Esmeraldal",
            Neighborhood::Cumbres => "Cumbres",
            Neighborhood::Choco => "Chocó",
            Neighborhood::Frontera => "Frontera",
            Neighborhood::Zuniga => "Zúñiga",
            Neighborhood::Benedictinos => "Benedictinos",
        }
    }

    pub fn from_label(label: &str) -> Option<Neighborhood> {
        let label = label.trim();
        Self::ALL.iter().copied().find(|n| n.label() == label)
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
