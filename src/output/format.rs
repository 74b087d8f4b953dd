use std::fmt::UpperHex;

/// список пар границ в виде `(0x0030, 0x0039), ...` с переносом строк по длине line_length
pub fn format_range_vec<T>(ranges: &[(T, T)], width: usize, line_length: usize) -> String
where
    T: UpperHex,
{
    let mut output = String::new();
    let mut line = String::new();

    for (lo, hi) in ranges {
        let entry = format!("(0x{:0w$X}, 0x{:0w$X}), ", lo, hi, w = width);

        if !line.is_empty() && line.len() + entry.len() > line_length {
            output.push_str("\n    ");
            output.push_str(line.trim_end());
            line.clear();
        }

        line.push_str(&entry);
    }

    if !line.is_empty() {
        output.push_str("\n    ");
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn empty()
    {
        assert_eq!(format_range_vec::<u16>(&[], 4, 120), "");
    }

    #[test]
    fn pairs_are_padded()
    {
        assert_eq!(
            format_range_vec(&[(0x30u16, 0x39u16), (0x2B, 0x2B)], 4, 120),
            "\n    (0x0030, 0x0039), (0x002B, 0x002B),\n"
        );
        assert_eq!(
            format_range_vec(&[(0x1D538u32, 0x1D539u32)], 5, 120),
            "\n    (0x1D538, 0x1D539),\n"
        );
    }

    #[test]
    fn long_lists_wrap()
    {
        let ranges: Vec<(u16, u16)> = (0 .. 20).map(|i| (i, i)).collect();
        let output = format_range_vec(&ranges, 4, 40);

        assert!(output.lines().skip(1).all(|l| l.len() <= 40 + 4));
        assert_eq!(output.matches("(0x").count(), 20);
    }
}
