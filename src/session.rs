//! A loaded cartridge and everything derived from it
//!
//! The session owns the cart together with its listing and sheet caches, so
//! dropping the session (or opening another cart) discards every cached
//! result at once.

use crate::bank::BankView;
use crate::block_cache::{BlockCache, LoadStatus};
use crate::cart::Cart;
use crate::chr::{render_sheet, AssetRenderer, ChrSheetRenderer, Image};
use crate::command::{ChrExport, Clipboard, ClipboardCopy};
use crate::config::InspectorConfig;
use crate::decoder::{InstructionDecoder, Mos6502Decoder};
use crate::error::{DisError, InspectError};
use crate::listing::{self, listing_error, Listing, ListingBuilder};
use indexmap::IndexMap;
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;
use std::thread;

pub struct CartSession {
    name: String,
    cart: Arc<Cart>,
    decoder: Arc<dyn InstructionDecoder>,
    renderer: Arc<dyn AssetRenderer>,
    config: InspectorConfig,
    listings: BlockCache<Arc<Listing>>,
    /// One sheet cache per requested scale
    sheets: IndexMap<u32, BlockCache<Arc<Image>>>,
}

fn build_listing(
    decoder: &dyn InstructionDecoder,
    bank: &BankView<'_>,
    verbose: bool,
) -> LoadStatus<Arc<Listing>> {
    let lines = ListingBuilder::new(decoder).verbose(verbose).build(bank);
    if let Some(err) = listing_error(&lines) {
        warn!("listing for bank {} truncated: {}", bank.ord(), err);
    }
    debug!("bank {} listing: {} lines", bank.ord(), lines.len());
    LoadStatus::Loaded(Arc::new(lines))
}

fn missing_prg() -> InspectError {
    InspectError::Decode(DisError::PrgRom)
}

impl CartSession {
    pub fn new(name: &str, cart: Cart, config: InspectorConfig) -> Self {
        Self::with_collaborators(
            name,
            cart,
            Arc::new(Mos6502Decoder),
            Arc::new(ChrSheetRenderer),
            config,
        )
    }

    pub fn with_collaborators(
        name: &str,
        cart: Cart,
        decoder: Arc<dyn InstructionDecoder>,
        renderer: Arc<dyn AssetRenderer>,
        config: InspectorConfig,
    ) -> Self {
        let listings = BlockCache::new(cart.prg_banks());
        CartSession {
            name: name.to_string(),
            cart: Arc::new(cart),
            decoder,
            renderer,
            config,
            listings,
            sheets: IndexMap::new(),
        }
    }

    pub fn open(path: &Path, config: InspectorConfig) -> Result<Self, InspectError> {
        let cart = Cart::load(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!("opened session for {}", name);
        Ok(Self::new(&name, cart, config))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn listing_cache(&self) -> &BlockCache<Arc<Listing>> {
        &self.listings
    }

    pub fn sheet_cache(&self, scale: u32) -> Option<&BlockCache<Arc<Image>>> {
        self.sheets.get(&scale)
    }

    /// Listing for one PRG bank, decoded on first request
    pub fn listing_for(&mut self, index: usize) -> LoadStatus<Arc<Listing>> {
        let bank = match self.cart.prg_bank(index) {
            Some(bank) => bank,
            None => return LoadStatus::Failed(missing_prg()),
        };
        match self.listings.get(index) {
            Some(status) if !status.is_pending() => return status,
            _ => {}
        }

        let status = build_listing(
            self.decoder.as_ref(),
            &bank,
            self.config.listing.verbose_listing,
        );
        self.listings.set(index, status.clone());
        status
    }

    /// Tile sheet for one CHR bank at `scale`, rendered on first request
    pub fn sheet_for(&mut self, index: usize, scale: u32) -> LoadStatus<Arc<Image>> {
        let bank = match self.cart.chr_bank(index) {
            Some(bank) => bank,
            None => return LoadStatus::Failed(InspectError::Render(DisError::ChrRom)),
        };
        let capacity = self.cart.chr_banks();
        let cache = self
            .sheets
            .entry(scale)
            .or_insert_with(|| BlockCache::new(capacity));
        match cache.get(index) {
            Some(status) if !status.is_pending() => return status,
            _ => {}
        }

        let status = match render_sheet(self.renderer.as_ref(), &bank, scale) {
            Ok(image) => LoadStatus::Loaded(Arc::new(image)),
            Err(failure) => {
                warn!(
                    "chr bank {} at {}x: {}",
                    index,
                    scale,
                    failure.reason()
                );
                LoadStatus::Failed(failure.into())
            }
        };
        cache.set(index, status.clone());
        status
    }

    /// Decode every pending PRG bank on worker threads. Results are joined
    /// before any of them reaches the cache. Returns the number of banks
    /// decoded.
    pub fn preload_listings(&mut self) -> usize {
        let pending = self.listings.pending();
        if pending.is_empty() {
            return 0;
        }
        let workers = thread::available_parallelism().map_or(1, |n| n.get());
        let chunk_size = (pending.len() + workers - 1) / workers;
        let decoder = self.decoder.as_ref();
        let cart = self.cart.as_ref();
        let verbose = self.config.listing.verbose_listing;

        let results: Vec<(usize, LoadStatus<Arc<Listing>>)> = thread::scope(|s| {
            let handles: Vec<_> = pending
                .chunks(chunk_size.max(1))
                .map(|indices| {
                    s.spawn(move || {
                        indices
                            .iter()
                            .map(|&i| {
                                let status = match cart.prg_bank(i) {
                                    Some(bank) => build_listing(decoder, &bank, verbose),
                                    None => LoadStatus::Failed(missing_prg()),
                                };
                                (i, status)
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .filter_map(|h| match h.join() {
                    Ok(done) => Some(done),
                    Err(_) => {
                        warn!("listing worker panicked, its banks stay pending");
                        None
                    }
                })
                .flatten()
                .collect()
        });

        let count = results.len();
        for (index, status) in results {
            self.listings.set(index, status);
        }
        info!("preloaded {} listings", count);
        count
    }

    /// Clipboard text for one bank's listing
    pub fn listing_text(&mut self, index: usize) -> Result<String, InspectError> {
        let lines = match self.listing_for(index) {
            LoadStatus::Loaded(lines) => lines,
            LoadStatus::Failed(err) => return Err(err),
            LoadStatus::Pending => return Err(InspectError::Unknown),
        };
        let bank = self.cart.prg_bank(index).ok_or_else(missing_prg)?;
        Ok(listing::listing_text(&bank, &lines))
    }

    pub fn info_text(&self, verbose: bool) -> String {
        self.cart.info_text(&self.name, verbose)
    }

    pub fn chr_export(&self) -> ChrExport {
        ChrExport::new(
            Arc::clone(&self.cart),
            Arc::clone(&self.renderer),
            self.config.chr.scale,
            &self.config.chr.export_prefix,
            self.config.transition(),
        )
    }

    pub fn clipboard_copy(&self, clipboard: Box<dyn Clipboard>) -> ClipboardCopy {
        ClipboardCopy::clipboard(clipboard, self.config.transition())
    }

    /// Start copying a bank listing; a listing that cannot be produced fails
    /// the command instead
    pub fn copy_listing(&mut self, command: &mut ClipboardCopy, index: usize) -> bool {
        match self.listing_text(index) {
            Ok(text) => command.copy_text(text),
            Err(err) => command.invoke(move || Err(err)),
        }
    }

    pub fn copy_info(&self, command: &mut ClipboardCopy) -> bool {
        command.copy_text(self.info_text(self.config.listing.verbose_info))
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
