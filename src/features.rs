use indexmap::IndexMap;

/// One-hot encoded type columns the training side produced.
pub const TYPE_FEATURES: [&str; 11] = [
    "Dark", "Dragon", "Electric", "Fighting", "Fire", "Flying", "Grass", "Normal", "Poison",
    "Rock", "Water",
];

/// One-hot encoded color columns.
pub const COLOR_FEATURES: [&str; 10] = [
    "Black", "Blue", "Brown", "Green", "Grey", "Pink", "Purple", "Red", "White", "Yellow",
];

/// Submitted form fields. Urlencoded forms repeat the key for
/// multi-selects, so this keeps every pair instead of collapsing to a map.
#[derive(Clone, Debug, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        FormData { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// Lenient float parsing: blank or garbage input falls back to the default.
fn to_float(value: Option<&str>, default: f64) -> f64 {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Integer fields arrive as text too, possibly as "3.0".
fn to_int(value: Option<&str>, default: i64) -> i64 {
    match value {
        Some(v) if !v.trim().is_empty() => v
            .trim()
            .parse::<f64>()
            .map(|f| f as i64)
            .unwrap_or(default),
        _ => default,
    }
}

/// Builds a single input row in the exact order the model expects.
///
/// Returns both the ordered vector and the named values for display.
/// Fields the model does not know are dropped; features the form did not
/// cover stay at 0.0.
pub fn build_feature_vector(
    form: &FormData,
    features: &[String],
) -> (Vec<f64>, IndexMap<String, f64>) {
    let mut row: IndexMap<String, f64> =
        features.iter().map(|name| (name.clone(), 0.0)).collect();

    let set = |row: &mut IndexMap<String, f64>, name: &str, value: f64| {
        if let Some(slot) = row.get_mut(name) {
            *slot = value;
        }
    };

    // numeric inputs
    set(&mut row, "Total", to_float(form.get("Total"), 0.0));
    set(&mut row, "HP", to_float(form.get("HP"), 0.0));
    set(&mut row, "Attack", to_float(form.get("Attack"), 0.0));
    set(&mut row, "Defense", to_float(form.get("Defense"), 0.0));
    set(&mut row, "Sp_Atk", to_float(form.get("Sp_Atk"), 0.0));
    set(&mut row, "Sp_Def", to_float(form.get("Sp_Def"), 0.0));
    set(&mut row, "Speed", to_float(form.get("Speed"), 0.0));

    set(&mut row, "Generation", to_int(form.get("Generation"), 1) as f64);

    // bool-ish
    let checkbox = |key: &str| if form.get(key) == Some("on") { 1.0 } else { 0.0 };
    set(&mut row, "hasGender", checkbox("hasGender"));
    set(&mut row, "hasMegaEvolution", checkbox("hasMegaEvolution"));

    // proportion male (0..1)
    let pr_male = to_float(form.get("Pr_Male"), 0.5).clamp(0.0, 1.0);
    set(&mut row, "Pr_Male", pr_male);

    // size + catch
    set(&mut row, "Height_m", to_float(form.get("Height_m"), 1.0));
    set(&mut row, "Weight_kg", to_float(form.get("Weight_kg"), 10.0));
    set(&mut row, "Catch_Rate", to_float(form.get("Catch_Rate"), 45.0));

    // frequency-encoded body style, accepted as a plain number
    set(
        &mut row,
        "Body_Style_new",
        to_float(form.get("Body_Style_new"), 1.0),
    );

    // types (multi-select)
    let selected_types = form.get_all("types");
    for type_name in TYPE_FEATURES {
        let value = if selected_types.contains(&type_name) {
            1.0
        } else {
            0.0
        };
        set(&mut row, type_name, value);
    }

    // color (single-select)
    if let Some(color) = form.get("color") {
        if COLOR_FEATURES.contains(&color) {
            set(&mut row, color, 1.0);
        }
    }

    let vector = row.values().copied().collect();
    (vector, row)
}
