use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/grch_assemblies.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the assembly catalog before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let assemblies = catalog.get("assemblies").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'assemblies' field\n\
             The catalog must have a top-level 'assemblies' array.\n"
        );
    });

    let entries = assemblies.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'assemblies' must be an array\n\
             Got: {assemblies}\n"
        );
    });

    assert!(
        !entries.is_empty(),
        "\n\nCATALOG BUILD ERROR: 'assemblies' array is empty\n"
    );

    for (i, entry) in entries.iter().enumerate() {
        validate_entry_fields(entry, i);
    }

    println!(
        "cargo:warning=Validated assembly catalog: {} sequences",
        entries.len()
    );
}

fn validate_entry_fields(entry: &serde_json::Value, index: usize) {
    let accession = entry
        .get("accession")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Entry at index {index} missing 'accession' field\n"
            );
        });

    assert!(
        entry.get("chromosome").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Entry '{accession}' (index {index}) missing 'chromosome' field\n"
    );

    let build = entry.get("build").and_then(|v| v.as_str());
    assert!(
        build.is_some(),
        "\n\nCATALOG BUILD ERROR: Entry '{accession}' (index {index}) missing 'build' field\n"
    );

    // Build tags follow the internal "b<N>" convention
    if let Some(tag) = build {
        assert!(
            tag.starts_with('b') && tag[1..].chars().all(|c| c.is_ascii_digit()),
            "\n\nCATALOG BUILD ERROR: Entry '{accession}' has malformed build tag '{tag}'\n\
             Expected the form 'b<digits>' (e.g., 'b38').\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/grch_assemblies.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
