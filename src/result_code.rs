/// Numeric outcome of an operation, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ResultCode {
    Success = 0,
    DirectoryError = 1,
    FileError = 2,
    DbReadError = 3,
    DbWriteError = 4,
    JsonError = 5,
    IdError = 6,
    InputError = 7,
}

impl ResultCode {
    #[allow(dead_code)]
    pub fn value(self) -> i32 {
        self as i32
    }

    #[allow(dead_code)]
    pub fn is_success(self) -> bool {
        self == ResultCode::Success
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultCode::Success => "success",
            ResultCode::DirectoryError => "config directory error",
            ResultCode::FileError => "config file error",
            ResultCode::DbReadError => "database read error",
            ResultCode::DbWriteError => "database write error",
            ResultCode::JsonError => "database json error",
            ResultCode::IdError => "to-do id error",
            ResultCode::InputError => "to-do input error",
        }
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
