use std::path::PathBuf;

use crate::PrepareError;

/// версия Unicode по умолчанию
pub const DEFAULT_VERSION: &str = "15.1.0";

pub const USAGE: &str = "Использование: prepare [--offline] [--data-dir <каталог>] [--output <файл>] [<версия Unicode>]";

/// параметры запуска
#[derive(Debug, PartialEq, Clone)]
pub struct Config
{
    /// версия Unicode: выбирает файлы UCD и попадает в заголовок таблицы
    pub version: String,
    /// каталог кеша файлов UCD, файлы лежат в <data_dir>/<версия>/
    pub data_dir: PathBuf,
    /// файл, в который пишется таблица
    pub output: PathBuf,
    /// не загружать файлы, только читать кеш
    pub offline: bool,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            version: DEFAULT_VERSION.to_owned(),
            data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/ucd")),
            output: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/code_point_ranges.rs")),
            offline: false,
        }
    }
}

impl Config
{
    /// разобрать аргументы командной строки (без имени программы)
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, PrepareError>
    {
        let mut config = Self::default();
        let mut version: Option<String> = None;

        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--offline" => config.offline = true,
                "--data-dir" => config.data_dir = PathBuf::from(value_of(&arg, args.next())?),
                "--output" => config.output = PathBuf::from(value_of(&arg, args.next())?),
                flag if flag.starts_with("--") => {
                    return Err(usage(format!("неизвестный параметр {}", flag)));
                }
                _ if version.is_some() => {
                    return Err(usage(format!("лишний аргумент {}", arg)));
                }
                _ => version = Some(arg.clone()),
            }
        }

        if let Some(version) = version {
            if !is_version(version.as_str()) {
                return Err(usage(format!(
                    "некорректная версия Unicode `{}`, ожидается вида 15.1.0",
                    version
                )));
            }

            config.version = version;
        }

        Ok(config)
    }
}

/// значение параметра, следующее за ним
fn value_of(flag: &str, value: Option<String>) -> Result<String, PrepareError>
{
    match value {
        Some(value) if !value.starts_with("--") => Ok(value),
        _ => Err(usage(format!("для {} не указано значение", flag))),
    }
}

fn usage(message: String) -> PrepareError
{
    PrepareError::Usage(format!("{}\n{}", message, USAGE))
}

/// версия Unicode: три числа через точку
fn is_version(version: &str) -> bool
{
    let parts: Vec<&str> = version.split('.').collect();

    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}
