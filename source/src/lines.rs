/// строка с данными: не пустая и не комментарий
///
/// комментарии в конце строки здесь не отрезаются, это дело разбора конкретного файла
#[inline]
pub fn is_data_line(line: &str) -> bool
{
    !line.is_empty() && !line.starts_with('#')
}

/// строки файла UCD с данными, в исходном порядке
pub fn data_lines(text: &str) -> impl Iterator<Item = &str>
{
    text.lines().filter(|line| is_data_line(line))
}

/// строки файла UCD с данными вместе с их номерами (с единицы) в исходном тексте
pub fn numbered_data_lines(text: &str) -> impl Iterator<Item = (usize, &str)>
{
    text.lines()
        .enumerate()
        .filter(|(_, line)| is_data_line(line))
        .map(|(i, line)| (i + 1, line))
}
