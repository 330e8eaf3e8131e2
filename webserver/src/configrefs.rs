use bookstore::config::{ValueRef, parse, validate};

pub const SERVER_ALL_INTERFACES: ValueRef<'_, bool> = ValueRef {
    names: &["webserver", "server", "all-interfaces"],
    def: "true",
    type_: &parse::BOOL,
    validators: &[],
};

pub const SERVER_PORT: ValueRef<'_, u16> = ValueRef {
    names: &["webserver", "server", "port"],
    def: "8080",
    type_: &parse::WEB_PORT,
    validators: &[],
};

pub const SERVER_ROOT_PATH: ValueRef<'_, String> = ValueRef {
    names: &["webserver", "server", "root-path"],
    def: "/",
    type_: &parse::STRING,
    validators: &[validate::WEB_PATH],
};
