use core::fmt;

use crate::CodepointRange;

mod east_asian_width;
mod emoji;

pub use east_asian_width::EastAsianWidth;
pub use emoji::EmojiProperty;

#[derive(Debug, PartialEq, Clone)]
pub enum PropertiesError
{
    /// токен не похож ни на XXXX, ни на XXXX..YYYY
    MalformedToken(String),
    /// в строке нет разделителя полей
    MalformedLine(String),
}

impl fmt::Display for PropertiesError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::MalformedToken(token) => write!(f, "некорректный диапазон кодпоинтов `{}`", token),
            Self::MalformedLine(line) => write!(f, "некорректная строка данных `{}`", line),
        }
    }
}

impl std::error::Error for PropertiesError {}

/// разбить строку данных на диапазон и значение свойства
///
/// `<диапазон> ; <значение> # <комментарий>`
fn split_fields(line: &str) -> Result<(CodepointRange, &str), PropertiesError>
{
    let data = match line.split_once('#') {
        Some((data, _)) => data,
        None => line,
    };

    let (token, rest) = match data.split_once(';') {
        Some(fields) => fields,
        None => return Err(PropertiesError::MalformedLine(line.to_owned())),
    };

    let token = token.split_whitespace().next().unwrap_or_default();
    let range = CodepointRange::try_from(token)?;

    let value = match rest.split_once(';') {
        Some((value, _)) => value,
        None => rest,
    };

    Ok((range, value.trim()))
}
