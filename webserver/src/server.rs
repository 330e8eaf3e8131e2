use std::net::{Ipv4Addr, SocketAddr};
use bookstore::config::{self, Config};
use bookstore::db::Db;
use crate::configrefs;

/// Per-worker state shared by request handlers.
pub struct State {
    pub db: Box<dyn Db>,
}

impl State {
    pub fn new(cfg: &dyn Config) -> Result<State, String> {
        let db = bookstore::db::open(cfg)?;
        Ok(State { db: Box::new(db) })
    }
}

pub fn addr<C>(cfg: &C) -> Result<SocketAddr, String>
where
    C: Config + ?Sized,
{
    let all_interfaces = config::get_ref(cfg, &configrefs::SERVER_ALL_INTERFACES)?;
    let ip = if all_interfaces { Ipv4Addr::UNSPECIFIED }
             else { Ipv4Addr::LOCALHOST };
    let port = config::get_ref(cfg, &configrefs::SERVER_PORT)?;
    Ok(SocketAddr::from((ip, port)))
}
