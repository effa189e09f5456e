//! Command-line arguments and the `rooms` command.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use roomdesk::{favorites, toggle_favorite, FileStore, KeyValueStore, MemoryStore};
use roomdesk::{Dir, ListConfig, ListView, Page};
use tracing::{debug, info};

use crate::room::{load_rooms, sample_rooms, Room};

/// Browse hotel rooms: search, sort and page through a room list.
#[derive(Debug, Parser)]
#[command(name = "rooms", version)]
pub struct Args {
    /// JSON file with an array of rooms (defaults to the bundled sample)
    #[arg(long, value_name = "PATH")]
    pub rooms: Option<PathBuf>,

    /// List settings as JSON or YAML
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show rooms whose number contains TERM
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Field to sort by
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort direction
    #[arg(long, value_enum)]
    pub dir: Option<SortDir>,

    /// Page to show, from 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rooms per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// File that keeps favorites between runs
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Add or remove a room id from the favorites
    #[arg(long, value_name = "ROOM_ID")]
    pub favorite: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDir {
    Asc,
    Desc,
}

impl From<SortDir> for Dir {
    fn from(dir: SortDir) -> Self {
        match dir {
            SortDir::Asc => Dir::Asc,
            SortDir::Desc => Dir::Desc,
        }
    }
}

fn load_config(path: &Path) -> Result<ListConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => ListConfig::from_json_str(&text)?,
        Some("yaml") | Some("yml") => ListConfig::from_yaml_str(&text)?,
        _ => bail!("config must be a .json, .yaml or .yml file: {}", path.display()),
    };
    Ok(config)
}

fn list_config(args: &Args) -> Result<ListConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ListConfig::default(),
    };
    if let Some(size) = args.page_size {
        config = config.page_size(size);
    }
    let field = args.sort.clone().unwrap_or_else(|| config.sort_field.clone());
    let dir = args.dir.map(Dir::from).unwrap_or(config.sort_dir);
    Ok(config.sort(field, dir))
}

/// Run the command, writing the page to `out`.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<()> {
    let rooms = match &args.rooms {
        Some(path) => load_rooms(path)?,
        None => sample_rooms()?,
    };
    info!(rooms = rooms.len(), "loaded rooms");

    let mut list = ListView::<Room>::new(list_config(args)?).context("invalid list settings")?;
    list.set_page(args.page)?;
    if let Some(term) = &args.search {
        list.restore_search(term.as_str());
    }

    let mut store: Box<dyn KeyValueStore> = match &args.store {
        Some(path) => Box::new(FileStore::open(path)?),
        None => Box::new(MemoryStore::new()),
    };
    if let Some(id) = &args.favorite {
        let added = toggle_favorite(store.as_mut(), id)?;
        debug!(id = %id, added, "favorite toggled");
    }
    let starred = favorites(store.as_ref())?;

    let page = list.view(&rooms);
    render(&page, &starred, out)?;
    Ok(())
}

fn render(page: &Page<'_, Room>, starred: &[String], out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Page {}/{} ({} rooms)",
        page.current_page,
        page.page_count.max(1),
        page.total
    )?;
    for room in &page.items {
        let star = if starred.contains(&room.id) { " *" } else { "" };
        writeln!(
            out,
            "{:<6} {:<9} {:>6} {:>4.1} {:>3} reviews{}",
            room.room_number,
            room.kind.as_str(),
            room.price,
            room.rate,
            room.count_reviews,
            star
        )?;
    }
    if page.is_empty() {
        writeln!(out, "No rooms found.")?;
    }
    Ok(())
}
