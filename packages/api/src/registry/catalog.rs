//! The registered item types. Field lists and limits follow the backend models.

use super::{
    ApiEndpoints, FieldConfig, ItemTypeConfig, Labels, SelectOption, SortOrder, TableConfig,
};

const WINE_COLORS: &[SelectOption] = &[
    SelectOption::same("Rouge"),
    SelectOption::same("Blanc"),
    SelectOption::same("Rosé"),
    SelectOption::same("Mousseux"),
    SelectOption::same("Orange"),
];

const COFFEE_SPECIES: &[SelectOption] = &[
    SelectOption::same("Arabica"),
    SelectOption::same("Robusta"),
    SelectOption::same("Libérica"),
    SelectOption::same("Excelsa"),
];

const COFFEE_PROCESSING: &[SelectOption] = &[
    SelectOption::same("Lavé"),
    SelectOption::same("Nature"),
    SelectOption::same("Honey"),
    SelectOption::same("Anaérobie"),
    SelectOption::same("Macération Carbonique"),
    SelectOption::same("Décortiqué Humide"),
    SelectOption::same("Nature Dépulpé"),
];

const COFFEE_ROAST: &[SelectOption] = &[
    SelectOption::same("Pâle"),
    SelectOption::same("Moyen"),
    SelectOption::same("Foncé"),
];

const INTENSITY: &[SelectOption] = &[
    SelectOption::same("Faible"),
    SelectOption::same("Moyen"),
    SelectOption::same("Élevé"),
];

const CHEESE_FIELDS: &[FieldConfig] = &[
    FieldConfig::text("name", "Name")
        .required()
        .max_length(100)
        .placeholder("e.g., Oka, Cheddar"),
    FieldConfig::text("type", "Type")
        .required()
        .max_length(100)
        .placeholder("e.g., Pâte pressée, Pâte molle")
        .helper("Cheese texture/aging type"),
    FieldConfig::text("origin", "Origin")
        .required()
        .max_length(100)
        .placeholder("e.g., Quebec, France"),
    FieldConfig::text("producer", "Producer")
        .required()
        .max_length(100)
        .placeholder("e.g., Fromagerie d'Oka"),
    FieldConfig::textarea("description", "Description")
        .max_length(500)
        .placeholder("Optional description..."),
];

const GIN_FIELDS: &[FieldConfig] = &[
    FieldConfig::text("name", "Name")
        .required()
        .max_length(100)
        .placeholder("e.g., Ungava, Hendrick's"),
    FieldConfig::text("producer", "Producer")
        .required()
        .max_length(100)
        .placeholder("e.g., Les Spiritueux Ungava"),
    FieldConfig::text("origin", "Origin")
        .required()
        .max_length(100)
        .placeholder("e.g., Quebec, Scotland"),
    FieldConfig::text("profile", "Profile")
        .required()
        .max_length(100)
        .placeholder("e.g., Forestier, Floral")
        .helper("Flavor profile or style"),
    FieldConfig::textarea("description", "Description")
        .max_length(500)
        .placeholder("Optional description..."),
];

const WINE_FIELDS: &[FieldConfig] = &[
    FieldConfig::text("name", "Name")
        .required()
        .max_length(200)
        .placeholder("e.g., Mas Bruguière L'Arbouse"),
    FieldConfig::select("color", "Color", WINE_COLORS)
        .required()
        .helper("Wine color/type"),
    FieldConfig::text("country", "Country")
        .required()
        .max_length(100)
        .placeholder("e.g., France, Spain, Italy"),
    FieldConfig::text("producer", "Producer")
        .max_length(200)
        .placeholder("e.g., Mas Bruguière"),
    FieldConfig::text("region", "Region")
        .max_length(100)
        .placeholder("e.g., Languedoc-Roussillon, Rioja"),
    FieldConfig::text("grape", "Grape Varieties")
        .max_length(200)
        .placeholder("e.g., Syrah 50%, Grenache 25%"),
    FieldConfig::text("designation", "Designation")
        .max_length(100)
        .placeholder("e.g., Pic Saint-Loup, AOC"),
    FieldConfig::number("alcohol", "Alcohol %")
        .range(0.0, 100.0)
        .placeholder("e.g., 13.5"),
    FieldConfig::number("sugar", "Sugar (g/L)").placeholder("e.g., 2.0"),
    FieldConfig::checkbox("organic", "Organic"),
    FieldConfig::textarea("description", "Description")
        .max_length(1000)
        .placeholder("Optional description..."),
];

const COFFEE_FIELDS: &[FieldConfig] = &[
    FieldConfig::text("name", "Name")
        .required()
        .max_length(255)
        .placeholder("e.g., Yirgacheffe Kochere"),
    FieldConfig::text("roaster", "Roaster")
        .required()
        .max_length(255)
        .placeholder("e.g., Café Saint-Henri"),
    FieldConfig::text("country", "Country")
        .max_length(255)
        .placeholder("e.g., Ethiopia, Colombia"),
    FieldConfig::text("region", "Region")
        .max_length(255)
        .placeholder("e.g., Yirgacheffe, Huila"),
    FieldConfig::text("farm", "Farm")
        .max_length(255)
        .placeholder("e.g., Finca El Paraíso"),
    FieldConfig::text("altitude", "Altitude")
        .max_length(50)
        .placeholder("e.g., 1800-2000m"),
    FieldConfig::select("species", "Species", COFFEE_SPECIES),
    FieldConfig::text("variety", "Variety")
        .max_length(100)
        .placeholder("e.g., Heirloom, Bourbon"),
    FieldConfig::select("processing_method", "Processing Method", COFFEE_PROCESSING),
    FieldConfig::checkbox("decaffeinated", "Decaffeinated"),
    FieldConfig::select("roast_level", "Roast Level", COFFEE_ROAST),
    FieldConfig::text("tasting_notes", "Tasting Notes")
        .max_length(100)
        .placeholder("e.g., Bergamot, Jasmine")
        .helper("List of flavour notes"),
    FieldConfig::select("acidity", "Acidity", INTENSITY),
    FieldConfig::select("body", "Body", INTENSITY),
    FieldConfig::select("sweetness", "Sweetness", INTENSITY),
    FieldConfig::checkbox("organic", "Organic"),
    FieldConfig::checkbox("fair_trade", "Fair Trade"),
    FieldConfig::textarea("description", "Description")
        .max_length(1000)
        .placeholder("Optional description..."),
];

pub static ITEM_TYPES: [ItemTypeConfig; 4] = [
    ItemTypeConfig {
        name: "cheese",
        labels: Labels {
            singular: "Cheese",
            plural: "Cheeses",
        },
        fields: CHEESE_FIELDS,
        table: TableConfig {
            columns: &["name", "type", "origin", "producer"],
            searchable_fields: &["name", "type", "origin", "producer"],
            default_sort: Some("name"),
            sort_order: SortOrder::Asc,
        },
        endpoints: ApiEndpoints {
            list: "/api/cheese/all",
            detail: "/api/cheese/{id}",
            delete_impact: "/admin/cheese/{id}/delete-impact",
            delete: "/admin/cheese/{id}",
            seed: "/admin/cheese/seed",
            validate: Some("/admin/cheese/validate"),
        },
    },
    ItemTypeConfig {
        name: "gin",
        labels: Labels {
            singular: "Gin",
            plural: "Gins",
        },
        fields: GIN_FIELDS,
        table: TableConfig {
            columns: &["name", "producer", "origin", "profile"],
            searchable_fields: &["name", "producer", "origin", "profile"],
            default_sort: Some("name"),
            sort_order: SortOrder::Asc,
        },
        endpoints: ApiEndpoints {
            list: "/api/gin/all",
            detail: "/api/gin/{id}",
            delete_impact: "/admin/gin/{id}/delete-impact",
            delete: "/admin/gin/{id}",
            seed: "/admin/gin/seed",
            validate: Some("/admin/gin/validate"),
        },
    },
    ItemTypeConfig {
        name: "wine",
        labels: Labels {
            singular: "Wine",
            plural: "Wines",
        },
        fields: WINE_FIELDS,
        table: TableConfig {
            columns: &["name", "color", "country", "producer", "region"],
            searchable_fields: &[
                "name",
                "color",
                "country",
                "producer",
                "region",
                "grape",
                "designation",
            ],
            default_sort: Some("name"),
            sort_order: SortOrder::Asc,
        },
        endpoints: ApiEndpoints {
            list: "/api/wine/all",
            detail: "/api/wine/{id}",
            delete_impact: "/admin/wine/{id}/delete-impact",
            delete: "/admin/wine/{id}",
            seed: "/admin/wine/seed",
            validate: Some("/admin/wine/validate"),
        },
    },
    ItemTypeConfig {
        name: "coffee",
        labels: Labels {
            singular: "Coffee",
            plural: "Coffees",
        },
        fields: COFFEE_FIELDS,
        table: TableConfig {
            columns: &["name", "roaster", "country", "roast_level"],
            searchable_fields: &["name", "roaster", "country", "region", "farm", "variety"],
            default_sort: Some("name"),
            sort_order: SortOrder::Asc,
        },
        endpoints: ApiEndpoints {
            list: "/api/coffee/all",
            detail: "/api/coffee/{id}",
            delete_impact: "/admin/coffee/{id}/delete-impact",
            delete: "/admin/coffee/{id}",
            seed: "/admin/coffee/seed",
            validate: Some("/admin/coffee/validate"),
        },
    },
];
