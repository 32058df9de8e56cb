//! The map session: the single source of truth a rendering shell queries.

use std::path::PathBuf;

use bm_core::{
    BmError, BmResult, FogGrid, GridCell, GridDims, GridMapper, ScenePoint, Token, TokenId,
    TokenRegistry,
};

use crate::config::SessionConfig;
use crate::event::{EventLog, SessionEvent, SessionEventKind};
use crate::stroke::BrushStroke;
use crate::viewport::Viewport;

/// The currently loaded map and its fog mask.
#[derive(Debug, Clone)]
struct MapState {
    width: u32,
    height: u32,
    fog: FogGrid,
}

/// One tabletop map session.
///
/// Owns the coordinate mapper, the loaded map's fog mask, the token
/// registry, the viewport, and the event log. The shell routes every
/// mutation through this type and reads state back to draw; each
/// successful mutating operation records one [`SessionEvent`] stamped with
/// an increasing counter.
///
/// A fresh session has no map: fog operations are inert until the first
/// [`load_map`](Self::load_map), while tokens and the viewport work from
/// the start.
#[derive(Debug)]
pub struct MapSession {
    mapper: GridMapper,
    map: Option<MapState>,
    tokens: TokenRegistry,
    viewport: Viewport,
    events: EventLog,
    seq: u64,
}

impl MapSession {
    /// Create a session from a configuration.
    ///
    /// A zero cell size in the configuration is rejected with
    /// [`BmError::InvalidCellSize`].
    pub fn new(config: SessionConfig) -> BmResult<Self> {
        let mapper = GridMapper::new(config.cell_size)?;
        Ok(Self {
            mapper,
            map: None,
            tokens: TokenRegistry::new(),
            viewport: Viewport::new(config.zoom_step),
            events: EventLog::new(config.max_events),
            seq: 0,
        })
    }

    // -----------------------------------------------------------------------
    // Map lifecycle
    // -----------------------------------------------------------------------

    /// Load a map of the given pixel dimensions.
    ///
    /// Replaces any previously loaded map and rebuilds the fog mask fully
    /// hidden at the current cell size. Tokens survive map loads by
    /// design: the party stays placed when the GM swaps floors. Zero-sized
    /// maps are rejected with [`BmError::InvalidDimensions`], leaving the
    /// previous map, if any, loaded.
    pub fn load_map(&mut self, width: u32, height: u32) -> BmResult<()> {
        let fog = FogGrid::new(self.mapper.grid_dims(width, height))?;
        self.map = Some(MapState { width, height, fog });
        self.record(
            SessionEventKind::MapLoaded { width, height },
            format!("loaded {width}x{height} map"),
        );
        Ok(())
    }

    /// Change the fog grid resolution.
    ///
    /// Zero is rejected with [`BmError::InvalidCellSize`]. On success any
    /// loaded fog mask is rebuilt fully hidden at the new resolution;
    /// reveal state does not survive a resize, an accepted information
    /// loss rather than something to silently remap. With no map loaded
    /// only the mapper changes; the next load uses the new size.
    pub fn set_cell_size(&mut self, cell_size: u32) -> BmResult<()> {
        let mapper = GridMapper::new(cell_size)?;
        if let Some(map) = &mut self.map {
            map.fog = FogGrid::new(mapper.grid_dims(map.width, map.height))?;
        }
        self.mapper = mapper;
        self.record(
            SessionEventKind::CellSizeChanged { cell_size },
            format!("cell size set to {cell_size}"),
        );
        Ok(())
    }

    /// The configured cell size in scene units.
    pub fn cell_size(&self) -> u32 {
        self.mapper.cell_size()
    }

    /// The coordinate mapper for the current cell size. Shells use it to
    /// place cell-aligned overlay rectangles.
    pub fn mapper(&self) -> GridMapper {
        self.mapper
    }

    /// Pixel dimensions of the loaded map, if any.
    pub fn map_size(&self) -> Option<(u32, u32)> {
        self.map.as_ref().map(|m| (m.width, m.height))
    }

    /// Extent of the current fog grid, if a map is loaded.
    pub fn grid_dims(&self) -> Option<GridDims> {
        self.map.as_ref().map(|m| m.fog.dims())
    }

    /// The current fog mask, if a map is loaded. Read-only: mutation goes
    /// through the paint and clear operations.
    pub fn fog(&self) -> Option<&FogGrid> {
        self.map.as_ref().map(|m| &m.fog)
    }

    // -----------------------------------------------------------------------
    // Fog painting
    // -----------------------------------------------------------------------

    /// Apply the brush centered on a cell.
    ///
    /// Returns the cells whose visibility changed so the shell can redraw
    /// just those overlay rectangles. With no map loaded, or a footprint
    /// entirely off the grid, this is a quiet no-op returning an empty
    /// delta; a no-op records no event.
    pub fn paint(&mut self, center: GridCell, radius: u32, reveal: bool) -> Vec<GridCell> {
        let Some(map) = &mut self.map else {
            return Vec::new();
        };
        let changed = map.fog.apply_brush(center, radius, reveal);
        if !changed.is_empty() {
            let verb = if reveal { "revealed" } else { "hid" };
            self.record(
                SessionEventKind::FogPainted {
                    reveal,
                    cells: changed.clone(),
                },
                format!("{verb} {} cells around {center}", changed.len()),
            );
        }
        changed
    }

    /// Apply the brush at a scene-space position: the click path. The
    /// point is mapped to its cell, then painted as in
    /// [`paint`](Self::paint).
    pub fn paint_at(&mut self, point: ScenePoint, radius: u32, reveal: bool) -> Vec<GridCell> {
        let center = self.mapper.cell_at(point);
        self.paint(center, radius, reveal)
    }

    /// Advance a drag stroke to a new scene-space sample, brushing every
    /// distinct cell the stroke crossed since the last sample so fast
    /// drags leave no unpainted gaps.
    ///
    /// Returns the merged delta across the crossed cells, recorded as a
    /// single event. The stroke advances even with no map loaded.
    pub fn paint_stroke(&mut self, stroke: &mut BrushStroke, point: ScenePoint) -> Vec<GridCell> {
        let center = self.mapper.cell_at(point);
        let crossed = stroke.step(center);
        let Some(map) = &mut self.map else {
            return Vec::new();
        };
        let mut changed = Vec::new();
        for cell in crossed {
            changed.extend(map.fog.apply_brush(cell, stroke.radius(), stroke.reveal()));
        }
        if !changed.is_empty() {
            let reveal = stroke.reveal();
            let verb = if reveal { "revealed" } else { "hid" };
            self.record(
                SessionEventKind::FogPainted {
                    reveal,
                    cells: changed.clone(),
                },
                format!("{verb} {} cells along a stroke", changed.len()),
            );
        }
        changed
    }

    /// Reveal the whole mask at once. Irreversible within the session
    /// short of reloading the map or re-hiding with the brush.
    ///
    /// Returns how many cells flipped. With no map loaded, or a mask that
    /// is already clear, nothing happens and no event is recorded.
    pub fn clear_fog(&mut self) -> usize {
        let Some(map) = &mut self.map else {
            return 0;
        };
        let revealed = map.fog.clear_all();
        if revealed > 0 {
            self.record(
                SessionEventKind::FogCleared { revealed },
                format!("cleared fog, {revealed} cells revealed"),
            );
        }
        revealed
    }

    /// Whether a cell is revealed.
    ///
    /// Fails with [`BmError::OutOfBounds`] for addresses off the grid,
    /// including every address when no map is loaded, since the grid is
    /// then zero-sized.
    pub fn is_revealed(&self, cell: GridCell) -> BmResult<bool> {
        match &self.map {
            Some(map) => map.fog.is_revealed(cell),
            None => Err(BmError::OutOfBounds {
                cell,
                dims: GridDims::new(0, 0),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Tokens
    // -----------------------------------------------------------------------

    /// Create a token and place it at a scene position.
    ///
    /// Tokens are independent of fog and of whether a map is loaded.
    /// Attribute values outside their declared ranges are rejected with
    /// [`BmError::InvalidAttribute`]. Returns a copy of the stored record.
    pub fn add_token(
        &mut self,
        sprite_path: impl Into<PathBuf>,
        name: impl Into<String>,
        hit_points: i32,
        armor_class: i32,
        position: ScenePoint,
    ) -> BmResult<Token> {
        let token = self
            .tokens
            .add(sprite_path, name, hit_points, armor_class, position)?;
        self.record(
            SessionEventKind::TokenAdded { id: token.id },
            format!("added token \"{}\" ({})", token.name, token.id),
        );
        Ok(token)
    }

    /// Rename a token.
    pub fn rename_token(&mut self, id: TokenId, name: impl Into<String>) -> BmResult<()> {
        self.tokens.rename(id, name)?;
        self.record(
            SessionEventKind::TokenUpdated { id },
            format!("renamed token {id}"),
        );
        Ok(())
    }

    /// Set a token's hit points. Values outside the allowed range are
    /// rejected with [`BmError::InvalidAttribute`], never clamped; the
    /// shell surfaces the error to the user.
    pub fn set_hit_points(&mut self, id: TokenId, value: i32) -> BmResult<()> {
        self.tokens.set_hit_points(id, value)?;
        self.record(
            SessionEventKind::TokenUpdated { id },
            format!("token {id} hit points set to {value}"),
        );
        Ok(())
    }

    /// Set a token's armor class, with the same rejection contract as
    /// [`set_hit_points`](Self::set_hit_points).
    pub fn set_armor_class(&mut self, id: TokenId, value: i32) -> BmResult<()> {
        self.tokens.set_armor_class(id, value)?;
        self.record(
            SessionEventKind::TokenUpdated { id },
            format!("token {id} armor class set to {value}"),
        );
        Ok(())
    }

    /// Move a token to a new scene position.
    pub fn move_token(&mut self, id: TokenId, position: ScenePoint) -> BmResult<()> {
        self.tokens.move_to(id, position)?;
        self.record(
            SessionEventKind::TokenMoved { id, position },
            format!("token {id} moved"),
        );
        Ok(())
    }

    /// Remove a token, returning the removed record.
    ///
    /// Records [`SessionEventKind::TokenRemoved`] carrying the id so the
    /// shell can discard whatever visual handle it cached for it.
    pub fn remove_token(&mut self, id: TokenId) -> BmResult<Token> {
        let token = self.tokens.remove(id)?;
        self.record(
            SessionEventKind::TokenRemoved { id },
            format!("removed token \"{}\" ({id})", token.name),
        );
        Ok(token)
    }

    /// Look up a token by id.
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    /// Iterate over tokens in z-order (insertion order, oldest first),
    /// which is the draw order for the shell.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Number of placed tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    // -----------------------------------------------------------------------
    // View
    // -----------------------------------------------------------------------

    /// Multiply the view scale by `factor`. View state is presentation
    /// only: it never touches grid indices, fog state, or token
    /// positions, and records no event.
    pub fn zoom(&mut self, factor: f64) {
        self.viewport.zoom(factor);
    }

    /// One zoom-in step using the configured multiplier.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    /// One zoom-out step: the inverse of [`zoom_in`](Self::zoom_in).
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Shift the view origin by a scene-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.viewport.pan(dx, dy);
    }

    /// The current view state, for projecting scene coordinates to screen
    /// pixels.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// All recorded events.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Take every accumulated event, leaving the log empty. Shells that
    /// patch their scene graph once per frame consume the log with this.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain()
    }

    /// Value of the mutation counter after the most recent recorded
    /// mutation. Starts at 0; the first mutation is stamped 1.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    fn record(&mut self, kind: SessionEventKind, description: String) {
        self.seq += 1;
        self.events.push(SessionEvent::new(self.seq, kind, description));
    }
}
