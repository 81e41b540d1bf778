use unicode_wide_ranges_source::CodepointRange;

/// представить массив диапазонов в текстовом виде: `0x3000..=0x303E, `
pub fn format_range_vec(input: &[CodepointRange], boundary: usize) -> String
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for range in input {
        let e_str = format!("0x{:04X}..=0x{:04X}, ", range.start(), range.end());

        match cur_len + e_str.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = e_str.len() + 4;
            }
            false => {
                cur_len += e_str.len();
            }
        };

        output.push_str(e_str.as_str());
    }
    output.push('\n');

    output
}
