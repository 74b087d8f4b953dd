use pretty_assertions::assert_eq;

use super::*;

#[test]
fn single_code_point_and_range()
{
    assert_eq!(
        parse_line(1, "002F;B").unwrap(),
        Some(ParsedLine {
            line_number: 1,
            range: (0x2F, 0x2F),
            class: MathClass::Binary,
        })
    );

    assert_eq!(
        parse_line(7, "0030..0039;N").unwrap(),
        Some(ParsedLine {
            line_number: 7,
            range: (0x30, 0x39),
            class: MathClass::Normal,
        })
    );

    assert_eq!(
        parse_line(2, "1D538..1D539;A").unwrap().map(|p| p.range),
        Some((0x1D538, 0x1D539))
    );
}

#[test]
fn comments_and_blank_lines_are_skipped()
{
    assert_eq!(parse_line(1, "# MathClass-15.txt").unwrap(), None);
    assert_eq!(parse_line(2, "").unwrap(), None);
    assert_eq!(parse_line(3, "   ").unwrap(), None);
    assert_eq!(parse_line(4, "#0030;N").unwrap(), None);
}

#[test]
fn crlf_line_endings()
{
    assert_eq!(
        parse_line(1, "0028;O\r").unwrap().map(|p| p.class),
        Some(MathClass::Opening)
    );
}

#[test]
fn three_fields_is_malformed()
{
    match parse_line(5, "0030;N;extra") {
        Err(BakeError::MalformedLine { line_number, line }) => {
            assert_eq!(line_number, 5);
            assert_eq!(line, "0030;N;extra");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(matches!(
        parse_line(6, "0030 N"),
        Err(BakeError::MalformedLine { .. })
    ));
}

#[test]
fn unknown_tag()
{
    match parse_line(3, "0030;Z") {
        Err(BakeError::UnknownClassTag { line_number, tag }) => {
            assert_eq!(line_number, 3);
            assert_eq!(tag, "Z");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn invalid_code_points()
{
    match parse_line(1, "ZZZZ;N") {
        Err(BakeError::InvalidCodePoint { literal, .. }) => assert_eq!(literal, "ZZZZ"),
        other => panic!("unexpected result: {:?}", other),
    }

    for raw in ["", "+30", "-30", "123456789", "0039..0030", "0030..0035..0039", "0030.."] {
        assert!(
            matches!(
                parse_code_points(1, raw),
                Err(BakeError::InvalidCodePoint { .. })
            ),
            "{:?} should be rejected",
            raw
        );
    }
}

#[test]
fn parsed_lines_are_lazy_and_stop_at_first_error()
{
    let source = ["# header", "0030..0039;N", "", "0041;Q", "0042;A"];
    let mut lines = ParsedLines::new(source.iter());

    let first = lines.next().unwrap().unwrap();
    assert_eq!(first.line_number, 2);
    assert_eq!(first.range, (0x30, 0x39));

    match lines.next() {
        Some(Err(BakeError::UnknownClassTag { line_number, tag })) => {
            assert_eq!(line_number, 4);
            assert_eq!(tag, "Q");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(lines.next().is_none());
}

#[test]
fn parsed_lines_from_text()
{
    let text = "# comment\n002B;V\n00D7;B\n";
    let parsed: Vec<ParsedLine> = ParsedLines::new(text.lines())
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(
        parsed.iter().map(|p| (p.range, p.class)).collect::<Vec<_>>(),
        vec![
            ((0x2B, 0x2B), MathClass::Vary),
            ((0xD7, 0xD7), MathClass::Binary)
        ]
    );
}

#[test]
fn read_lines_stream_from_reader()
{
    let source: &[u8] = b"# header\r\n002B;V\r\n\r\n00D7;B\r\n0041;A;\r\n0042;A\r\n";
    let mut lines = ReadLines::new(source);

    assert_eq!(
        lines.next().unwrap().unwrap(),
        ParsedLine {
            line_number: 2,
            range: (0x2B, 0x2B),
            class: MathClass::Vary,
        }
    );
    assert_eq!(lines.next().unwrap().unwrap().line_number, 4);
    assert!(matches!(
        lines.next(),
        Some(Err(BakeError::MalformedLine { line_number: 5, .. }))
    ));
    assert!(lines.next().is_none());
}

#[test]
fn read_lines_io_error_stops_iteration()
{
    let source: &[u8] = b"002B;V\n\xC3\x28;N\n00D7;B\n";
    let mut lines = ReadLines::new(source);

    assert!(lines.next().unwrap().is_ok());
    assert!(matches!(lines.next(), Some(Err(BakeError::Io(_)))));
    assert!(lines.next().is_none());
}
