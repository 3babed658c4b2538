//! Country and region tables.
//!
//! Region lists follow the survey's NUTS-based groupings and differ per
//! country. Country and region values are not re-coded: the model pipeline
//! was trained on these labels directly, so the encoder passes them through.

/// Returns all countries the model covers, in questionnaire order.
pub const fn countries() -> &'static [&'static str] {
    &[
        "Austria",
        "Belgium",
        "Bulgaria",
        "Croatia",
        "Cyprus",
        "Finland",
        "France",
        "Georgia",
        "Germany",
        "Greece",
        "Hungary",
        "Ireland",
        "Iceland",
        "Italy",
        "Lithuania",
        "Latvia",
        "Montenegro",
        "Netherlands",
        "Norway",
        "Poland",
        "Portugal",
        "Serbia",
        "Slovenia",
        "Slovakia",
        "Spain",
        "Sweden",
        "Switzerland",
        "United Kingdom",
    ]
}

/// Returns the region list for a country, or `None` for an unknown country.
pub fn regions(country: &str) -> Option<&'static [&'static str]> {
    let list: &'static [&'static str] = match country {
        "Austria" => &[
            "Burgenland",
            "Niederösterreich",
            "Wien",
            "Kärnten",
            "Steiermark",
            "Oberösterreich",
            "Salzburg",
            "Tirol",
            "Vorarlberg",
        ],
        "Belgium" => &[
            "Région de Bruxelles-Capitale/Brussels Hoofdstedelijk Gewest",
            "Vlaams Gewest",
            "Région wallonne",
        ],
        "Bulgaria" => &[
            "Северна и Югоизточна България",
            "Югозападна и Южна централна България",
        ],
        "Croatia" => &[
            "Panonska Hrvatska",
            "Jadranska Hrvatska",
            "Grad Zagreb",
            "Sjeverna Hrvatska",
        ],
        "Cyprus" => &["Κύπρος"],
        "Finland" => &[
            "Länsi-Suomi",
            "Helsinki-Uusimaa",
            "Etelä-Suomi",
            "Pohjois- ja Itä-Suomi",
            "Åland",
        ],
        "France" => &[
            "Ile-de-France",
            "Centre — Val de Loire",
            "Bourgogne",
            "Franche-Comté",
            "Basse-Normandie",
            "Haute-Normandie",
            "Nord-Pas de Calais",
            "Picardie",
            "Alsace",
            "Champagne-Ardenne",
            "Lorraine",
            "Pays de la Loire",
            "Bretagne",
            "Aquitaine",
            "Limousin",
            "Poitou-Charentes",
            "Languedoc-Roussillon",
            "Midi-Pyrénées",
            "Auvergne",
            "Rhône-Alpes",
            "Provence-Alpes-Côte d’Azur",
            "Corse",
            "Guadeloupe",
            "Martinique",
            "Guyane",
            "La Réunion",
            "Mayotte",
        ],
        "Georgia" => &["Capital", "Western Georgia", "Eastern Georgia"],
        "Germany" => &[
            "Baden-Württemberg",
            "Bayern",
            "Berlin",
            "Brandenburg",
            "Bremen",
            "Hamburg",
            "Hessen",
            "Mecklenburg-Vorpommern",
            "Niedersachsen",
            "Nordrhein-Westfalen",
            "Rheinland-Pfalz",
            "Saarland",
            "Sachsen",
            "Sachsen-Anhalt",
            "Schleswig-Holstein",
            "Thüringen",
        ],
        "Greece" => &[
            "Αττική",
            "Νησιά Αιγαίου, Κρήτη",
            "Βόρεια Ελλάδα",
            "Κεντρική Ελλάδα",
        ],
        "Hungary" => &["Közép-Magyarország", "Dunántúl", "Alföld és Észak"],
        "Ireland" => &["Northern and Western", "Southern", "Eastern and Midland"],
        "Iceland" => &["Ísland"],
        "Italy" => &["Nord-Ovest", "Sud", "Isole", "Nord-Est", "Centro"],
        "Lithuania" => &[
            "Sostinės regionas",
            "Vidurio ir vakarų Lietuvos regionas",
        ],
        "Latvia" => &["Latvija"],
        "Montenegro" => &["Црна Гора"],
        "Netherlands" => &[
            "Noord-Nederland",
            "Oost-Nederland",
            "West-Nederland",
            "Zuid-Nederland",
        ],
        "Norway" => &[
            "Norge",
            "Innlandet",
            "Trøndelag",
            "Nord-Norge",
            "Oslo og Viken",
            "Agder og Sør-Østlandet",
        ],
        "Poland" => &[
            "Makroregion południowy",
            "Makroregion północno-zachodni",
            "Makroregion południowo-zachodni",
            "Makroregion północny",
            "Makroregion centralny",
            "Makroregion wschodni",
            "Makroregion województwo mazowieckie",
        ],
        "Portugal" => &[
            "Continente",
            "Região Autónoma dos Açores",
            "Região Autónoma da Madeira",
        ],
        "Serbia" => &["Србија - север", "Србија - југ"],
        "Slovenia" => &["Slovenija", "Vzhodna Slovenija", "Zahodna Slovenija"],
        "Slovakia" => &[
            "Slovensko",
            "Bratislavský kraj",
            "Západné Slovensko",
            "Stredné Slovensko",
            "Východné Slovensko",
        ],
        "Spain" => &[
            "Galicia",
            "Principado de Asturias",
            "Cantabria",
            "País Vasco",
            "Comunidad Foral de Navarra",
            "La Rioja",
            "Aragón",
            "Comunidad de Madrid",
            "Castilla y León",
            "Castilla-La Mancha",
            "Extremadura",
            "Cataluña",
            "Comunitat Valenciana",
            "Illes Balears",
            "Andalucía",
            "Región de Murcia",
            "Ciudad de Ceuta",
            "Ciudad de Melilla",
            "Canarias",
        ],
        "Sweden" => &["Östra Sverige", "Södra Sverige", "Norra Sverige"],
        "Switzerland" => &[
            "Région lémanique",
            "Espace Mittelland",
            "Nordwestschweiz",
            "Zürich",
            "Ostschweiz",
            "Zentralschweiz",
            "Ticino",
        ],
        "United Kingdom" => &[
            "North East (England)",
            "North West (England)",
            "Yorkshire and the Humber",
            "East Midlands (England)",
            "West Midlands (England)",
            "East of England",
            "London",
            "South East (England)",
            "South West (England)",
            "Wales",
            "Scotland",
            "Northern Ireland",
        ],
        _ => return None,
    };
    Some(list)
}

/// Whether `region` belongs to `country`'s region list.
///
/// Unknown countries have no region list, so this returns `false` for them.
pub fn region_belongs_to(country: &str, region: &str) -> bool {
    regions(country).is_some_and(|list| list.contains(&region))
}
