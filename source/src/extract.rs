use core::fmt;

use crate::lines::numbered_data_lines;
use crate::{CodepointRange, PropertiesError, UcdFile};

/// ошибка разбора файла UCD: файл, номер строки, сама строка и причина
#[derive(Debug, PartialEq, Clone)]
pub struct ExtractError
{
    pub file: UcdFile,
    pub line: usize,
    pub text: String,
    pub error: PropertiesError,
}

impl fmt::Display for ExtractError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(
            f,
            "{}, строка {}: {}\n    {}",
            self.file, self.line, self.error, self.text
        )
    }
}

impl std::error::Error for ExtractError
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        Some(&self.error)
    }
}

/// диапазоны широких кодпоинтов из текста файла UCD, в порядке строк
///
/// первая же некорректная строка прерывает разбор
pub fn extract(file: UcdFile, text: &str) -> Result<Vec<CodepointRange>, ExtractError>
{
    let mut ranges = vec![];

    for (line, data) in numbered_data_lines(text) {
        match file.wide_range(data) {
            Ok(Some(range)) => ranges.push(range),
            Ok(None) => continue,
            Err(error) => {
                return Err(ExtractError {
                    file,
                    line,
                    text: data.to_owned(),
                    error,
                })
            }
        }
    }

    log::debug!("{}: широких диапазонов - {}", file, ranges.len());

    Ok(ranges)
}
