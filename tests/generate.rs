use std::path::{Path, PathBuf};

fn generate(name: &str, module: &str, files: &[&str]) {
    generate_impl(name, module, files, false);
}

fn generate_keeping_aria_hidden(name: &str, module: &str, files: &[&str]) {
    generate_impl(name, module, files, true);
}

fn generate_impl(name: &str, module: &str, files: &[&str], keep_aria_hidden: bool) {
    let tags = svg2elm::Tags::from_file(Path::new("tests/files/tags.json")).unwrap();

    let opt = svg2elm::Options {
        keep_aria_hidden,
        ..svg2elm::Options::default()
    };

    let paths: Vec<PathBuf> = files
        .iter()
        .map(|file| PathBuf::from(format!("tests/files/{}.svg", file)))
        .collect();

    let gallery = svg2elm::Gallery::from_files(module, &paths, &tags, &opt).unwrap();
    let output = gallery.to_string(&svg2elm::WriteOptions::default());

    // std::fs::write(
    //     format!("tests/files/{}-expected.elm", name),
    //     output.clone(),
    // )
    // .unwrap();

    let expected =
        std::fs::read_to_string(format!("tests/files/{}-expected.elm", name)).unwrap();
    // Do not use `assert_eq` because it produces an unreadable output.
    assert!(output == expected);
}

#[test]
fn outline_module() {
    generate("outline", "Outline", &["check", "arrow-left-circle"]);
}

#[test]
fn solid_module_keeps_aria_hidden() {
    generate_keeping_aria_hidden("solid", "Solid", &["check"]);
}

#[test]
fn empty_module() {
    let gallery = svg2elm::Gallery::new("Outline", Vec::new());
    let output = gallery.to_string(&svg2elm::WriteOptions::default());

    let expected = concat!(
        "module Gallery.Outline exposing (model)\n",
        "\n",
        "import Heroicons.Outline exposing (..)\n",
        "import Gallery exposing (Icon, XmlTree(..))\n",
        "\n",
        "\n",
        "model : List (Icon a)\n",
        "model =\n",
        "    []\n",
    );
    assert!(output == expected);
}

#[test]
fn icons_are_emitted_in_input_order() {
    let tags = svg2elm::Tags::default();
    let opt = svg2elm::Options::default();
    let svg = "<svg xmlns='http://www.w3.org/2000/svg'/>";

    let icons = vec![
        svg2elm::Icon::from_str(svg, "zulu", &tags, &opt).unwrap(),
        svg2elm::Icon::from_str(svg, "alpha", &tags, &opt).unwrap(),
    ];
    let gallery = svg2elm::Gallery::new("Outline", icons);
    let output = gallery.to_string(&svg2elm::WriteOptions::default());

    let zulu = output.find("name = \"zulu\"").unwrap();
    let alpha = output.find("name = \"alpha\"").unwrap();
    assert!(zulu < alpha);
}

#[test]
fn output_is_deterministic() {
    let tags = svg2elm::Tags::from_str("{ \"check\": [\"confirm\"] }").unwrap();
    let opt = svg2elm::Options::default();
    let svg = "<svg xmlns='http://www.w3.org/2000/svg' stroke-width='2'>\
               <path d='M5 13l4 4L19 7'/></svg>";

    let icon = svg2elm::Icon::from_str(svg, "check", &tags, &opt).unwrap();
    let gallery = svg2elm::Gallery::new("Outline", vec![icon]);

    let write_opt = svg2elm::WriteOptions::default();
    assert!(gallery.to_string(&write_opt) == gallery.to_string(&write_opt));
}

#[test]
fn mapped_attributes_keep_source_order() {
    let opt = svg2elm::Options::default();
    let svg = "<svg xmlns='http://www.w3.org/2000/svg' stroke-width='2' fill='none'/>";

    let icon = svg2elm::Icon::from_str(svg, "check", &svg2elm::Tags::default(), &opt).unwrap();
    let gallery = svg2elm::Gallery::new("Outline", vec![icon]);
    let output = gallery.to_string(&svg2elm::WriteOptions::default());

    assert!(output.contains("[(\"strokeWidth\", \"2\"),(\"fill\", \"none\")]"));
}

#[test]
fn failing_file_aborts_the_gallery() {
    let tags = svg2elm::Tags::default();
    let opt = svg2elm::Options::default();
    let paths = vec![
        PathBuf::from("tests/files/check.svg"),
        PathBuf::from("tests/files/does-not-exist.svg"),
    ];

    let result = svg2elm::Gallery::from_files("Outline", &paths, &tags, &opt);
    assert!(matches!(result, Err(svg2elm::Error::InFile(..))));
}
