//! # Administrative-division catalog
//!
//! Static lookup table of (department, province, district) triples used by
//! the client form's cascading selects. A client's location fields must
//! always form one row of this catalog; [`is_catalog_row`] is the
//! submit-time check backing that invariant.
//!
//! The table covers the operating region. Extending coverage means adding
//! rows here; nothing else in the app changes.

/// One selectable location triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogRow {
    pub department: &'static str,
    pub province: &'static str,
    pub district: &'static str,
}

const fn row(
    department: &'static str,
    province: &'static str,
    district: &'static str,
) -> CatalogRow {
    CatalogRow {
        department,
        province,
        district,
    }
}

pub const CATALOG: &[CatalogRow] = &[
    row("Lima", "Lima", "Lima"),
    row("Lima", "Lima", "Miraflores"),
    row("Lima", "Lima", "San Isidro"),
    row("Lima", "Lima", "Santiago de Surco"),
    row("Lima", "Lima", "San Borja"),
    row("Lima", "Lima", "La Molina"),
    row("Lima", "Lima", "San Juan de Lurigancho"),
    row("Lima", "Lima", "Ate"),
    row("Lima", "Lima", "Comas"),
    row("Lima", "Lima", "Los Olivos"),
    row("Lima", "Lima", "Villa El Salvador"),
    row("Lima", "Lima", "Chorrillos"),
    row("Lima", "Lima", "Barranco"),
    row("Lima", "Lima", "Jesús María"),
    row("Lima", "Lima", "Lince"),
    row("Lima", "Lima", "Magdalena del Mar"),
    row("Lima", "Lima", "Pueblo Libre"),
    row("Lima", "Lima", "San Miguel"),
    row("Lima", "Lima", "Surquillo"),
    row("Lima", "Cañete", "San Vicente de Cañete"),
    row("Lima", "Huaral", "Huaral"),
    row("Callao", "Callao", "Callao"),
    row("Callao", "Callao", "Bellavista"),
    row("Callao", "Callao", "La Perla"),
    row("Callao", "Callao", "Ventanilla"),
    row("Arequipa", "Arequipa", "Arequipa"),
    row("Arequipa", "Arequipa", "Cayma"),
    row("Arequipa", "Arequipa", "Yanahuara"),
    row("Arequipa", "Arequipa", "Cerro Colorado"),
    row("Arequipa", "Islay", "Mollendo"),
    row("Cusco", "Cusco", "Cusco"),
    row("Cusco", "Cusco", "Wanchaq"),
    row("Cusco", "Cusco", "San Sebastián"),
    row("Cusco", "Urubamba", "Urubamba"),
    row("La Libertad", "Trujillo", "Trujillo"),
    row("La Libertad", "Trujillo", "Víctor Larco Herrera"),
    row("La Libertad", "Ascope", "Chocope"),
    row("Piura", "Piura", "Piura"),
    row("Piura", "Piura", "Castilla"),
    row("Piura", "Sullana", "Sullana"),
    row("Lambayeque", "Chiclayo", "Chiclayo"),
    row("Lambayeque", "Chiclayo", "La Victoria"),
    row("Junín", "Huancayo", "Huancayo"),
    row("Junín", "Huancayo", "El Tambo"),
];

/// Departments, in catalog order, deduplicated.
pub fn departments() -> Vec<&'static str> {
    let mut out = Vec::new();
    for r in CATALOG {
        if !out.contains(&r.department) {
            out.push(r.department);
        }
    }
    out
}

/// Provinces of a department, in catalog order, deduplicated.
pub fn provinces(department: &str) -> Vec<&'static str> {
    let mut out = Vec::new();
    for r in CATALOG.iter().filter(|r| r.department == department) {
        if !out.contains(&r.province) {
            out.push(r.province);
        }
    }
    out
}

/// Districts of a (department, province) pair, in catalog order.
pub fn districts(department: &str, province: &str) -> Vec<&'static str> {
    CATALOG
        .iter()
        .filter(|r| r.department == department && r.province == province)
        .map(|r| r.district)
        .collect()
}

/// Whether the triple is a row of the catalog.
pub fn is_catalog_row(department: &str, province: &str, district: &str) -> bool {
    CATALOG.iter().any(|r| {
        r.department == department && r.province == province && r.district == district
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scoped_listing_is_consistent() {
        for dep in departments() {
            for prov in provinces(dep) {
                for dist in districts(dep, prov) {
                    assert!(is_catalog_row(dep, prov, dist));
                }
            }
        }
    }

    #[test]
    fn mixed_triple_is_rejected() {
        // District from Cusco under a Lima province.
        assert!(!is_catalog_row("Lima", "Lima", "Wanchaq"));
        assert!(!is_catalog_row("Arequipa", "Lima", "Miraflores"));
    }

    #[test]
    fn provinces_scoped_by_department() {
        assert!(provinces("Lima").contains(&"Cañete"));
        assert!(!provinces("Cusco").contains(&"Cañete"));
        assert!(provinces("Amazonas").is_empty());
    }

    #[test]
    fn no_duplicate_rows() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert!(a != b, "duplicate catalog row: {a:?}");
            }
        }
    }
}
