//! The edits a freshly copied template module needs before its first build.

pub const REQUIRED_DIRS: [&str; 2] = ["application", "hal"];

pub const OBSOLETE_MAIN: &str = "application/main.cpp";

pub const APP_INFO_PATH: &str = "application/dji_sdk_app_info.h";
pub const APP_INFO_BEFORE: &str = r##"#define USER_APP_NAME               "your_app_name"
#define USER_APP_ID                 "your_app_id"
#define USER_APP_KEY                "your_app_key"
#define USER_APP_LICENSE            "your_app_license"
#define USER_DEVELOPER_ACCOUNT      "your_developer_account"
#define USER_BAUD_RATE              "460800""##;

pub const APP_INFO_AFTER: &str = r##"#define USER_APP_NAME               "test"
#define USER_APP_ID                 "168809"
#define USER_APP_KEY                "fa42c26a9253e8d492b12e0baf83fdb"
#define USER_APP_LICENSE                                                                                                         \
 "yEduca4jloV78YzpEXaJ2W9Ys6VWMpRkTX3nOO4OyWdZBnDV59xyWm5kkvg+"                                                                  \
 "zyBibGjIc2PuAoRxAzOXIMWXahiG0cfR17naHK1MeQgmsJKDQPi7tbOehUges3m4ib71tZ3sO4TFEZGRsz8MJWrPRTqsnNgzqnkhh7lAq+"                    \
 "pJVn8u1UbH5GOCj2qrzzR9pW2UJiboIcZPSA5N0ygDHg+A4MdFWuRBHxIOIKPOR0MdHf1x2P1VVoOiJCvwcOm98ztlOzaCrWXPdutyPJynGyHQrBNA3ZdpdnmCt7+" \
 "hCo17lhXxUa+3jFxWDSA9aaf3KM9ZlBdC0daaGzT3QAs3Rkj42w=="
#define USER_DEVELOPER_ACCOUNT      "accepted"
#define USER_BAUD_RATE              "460800""##;

pub const UART_PATH: &str = "hal/hal_uart.h";
pub const UART_BEFORE: &str = r##"#define LINUX_UART_DEV1    "/dev/ttyUSB0"
#define LINUX_UART_DEV2    "/dev/ttyACM0""##;

pub const UART_AFTER: &str = r##"#define LINUX_UART_DEV1    "/dev/ttyUSB0"
#define LINUX_UART_DEV2    """##;

pub const APPLICATION_PATH: &str = "application/application.cpp";

// Both console sinks are commented out so the module logs only through its own logger.
pub const PRINT_CONSOLE_BEFORE: &str = r##"returnCode = DjiLogger_AddConsole(&printConsole);
if (returnCode != DJI_ERROR_SYSTEM_MODULE_CODE_SUCCESS) {
 throw std::runtime_error("Add printf console error.");
}"##;

pub const PRINT_CONSOLE_AFTER: &str = r##"// returnCode = DjiLogger_AddConsole(&printConsole);
// if (returnCode != DJI_ERROR_SYSTEM_MODULE_CODE_SUCCESS) {
//  throw std::runtime_error("Add printf console error.");
// }"##;

pub const RECORD_CONSOLE_BEFORE: &str = r##"returnCode = DjiLogger_AddConsole(&localRecordConsole);
if (returnCode != DJI_ERROR_SYSTEM_MODULE_CODE_SUCCESS) {
 throw std::runtime_error("Add printf console error.");
}"##;

pub const RECORD_CONSOLE_AFTER: &str = r##"// returnCode = DjiLogger_AddConsole(&localRecordConsole);
// if (returnCode != DJI_ERROR_SYSTEM_MODULE_CODE_SUCCESS) {
//  throw std::runtime_error("Add printf console error.");
// }"##;
