use super::*;
use tempfile::tempdir;

#[test]
fn parses_rules_with_selector_lists_and_comments() {
    let css = r#"
        /* editor colours */
        #textview, terminal {
            color: #d0d0d0;
            background-color: black !important;
        }

        button.active { font-weight: bold }
    "#;

    let sheet = Stylesheet::parse(css).unwrap();
    assert_eq!(sheet.rules.len(), 2);
    assert_eq!(sheet.rules[0].selectors, vec!["#textview", "terminal"]);
    assert_eq!(
        sheet.rules[0].declarations,
        vec![
            Declaration {
                property: "color".to_string(),
                value: "#d0d0d0".to_string(),
            },
            Declaration {
                property: "background-color".to_string(),
                value: "black".to_string(),
            },
        ]
    );
    assert_eq!(sheet.rules[1].selectors, vec!["button.active"]);
    assert_eq!(sheet.rules[1].declarations[0].value, "bold");
}

#[test]
fn skips_at_rules_with_nested_blocks() {
    let css = "@media screen { toolbar { color: red; } }\nstatusbar { color: blue; }";
    let sheet = Stylesheet::parse(css).unwrap();
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(sheet.rules[0].selectors, vec!["statusbar"]);
}

#[test]
fn ignores_malformed_declarations() {
    let sheet = Stylesheet::parse("window { nonsense; COLOR : White ;; }").unwrap();
    assert_eq!(
        sheet.rules[0].declarations,
        vec![Declaration {
            property: "color".to_string(),
            value: "White".to_string(),
        }]
    );
}

#[test]
fn empty_source_has_no_rules() {
    assert_eq!(Stylesheet::parse("  /* nothing */ \n").unwrap(), Stylesheet::default());
}

#[test]
fn reports_line_of_unclosed_block() {
    let err = Stylesheet::parse("window { color: red; }\n\ntoolbar {\n color: blue;").unwrap_err();
    match err {
        StylesheetError::Syntax { line, message } => {
            assert_eq!(line, 3);
            assert_eq!(message, "unclosed block");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reports_unterminated_comment_and_stray_text() {
    assert!(matches!(
        Stylesheet::parse("/* open"),
        Err(StylesheetError::Syntax {
            message: "unterminated comment",
            ..
        })
    ));
    assert!(matches!(
        Stylesheet::parse("window { color: red; } trailing"),
        Err(StylesheetError::Syntax {
            message: "expected '{'",
            ..
        })
    ));
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Stylesheet::load(&dir.path().join("styles.css")).unwrap_err();
    assert!(matches!(err, StylesheetError::Io { .. }));
    assert!(err.to_string().contains("styles.css"));
}
