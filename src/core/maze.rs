//! Maze layout parsing, wall volumes and spawn-point search.
use glam::{Vec3, vec3};
use std::path::Path;

use crate::config::WorldConfig;
use crate::core::collision::{Aabb, test_collision};
use crate::error::{Error, Result};

/// 1 = wall, 0 = empty. Centered on the origin at build time.
pub const DEFAULT_LAYOUT: &str = "\
111111111111111
100000100000001
101110101111101
101000000000101
101011111110101
101010000010101
100010111010101
101010100010001
101010101111101
101000100000101
101111111110101
100000000000101
101111111111101
100000000000001
111111111111111
";

/// Minimum distance from every wall center for a spawn cell.
const SPAWN_CLEARANCE: f32 = 1.5;
/// Cell used when no interior cell qualifies.
const FALLBACK_SPAWN_CELL: (usize, usize) = (1, 1);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeLayout {
    cells: Vec<Vec<Cell>>,
}

impl MazeLayout {
    /// Parses rows of `1`/`#` (wall) and `0`/space/`.` (empty). Anything else
    /// is treated as solid wall and short rows are padded with wall.
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells: Vec<Vec<Cell>> = Vec::new();
        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let row: Vec<Cell> = line
                .chars()
                .map(|ch| match ch {
                    '0' | ' ' | '.' => Cell::Empty,
                    _ => Cell::Wall,
                })
                .collect();
            cells.push(row);
        }
        if cells.is_empty() {
            return Err(Error::EmptyLayout);
        }
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut cells {
            row.resize(width, Cell::Wall);
        }
        Ok(Self { cells })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn builtin() -> Self {
        // DEFAULT_LAYOUT is non-empty, so parse cannot fail.
        Self::parse(DEFAULT_LAYOUT).unwrap_or_else(|_| Self { cells: vec![vec![Cell::Empty]] })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, |r| r.len())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wall {
    pub id: usize,
    pub row: usize,
    pub col: usize,
    pub aabb: Aabb,
}

/// Static wall set built once per session; walls never move.
#[derive(Clone, Debug)]
pub struct Maze {
    layout: MazeLayout,
    walls: Vec<Wall>,
    spawn_point: Vec3,
    cell_size: f32,
    half_extent: f32,
}

impl Maze {
    pub fn build(layout: MazeLayout, world: &WorldConfig, eye_height: f32) -> Self {
        let mut maze = Self {
            layout,
            walls: Vec::new(),
            spawn_point: Vec3::ZERO,
            cell_size: world.cell_size,
            half_extent: world.map_half_extent,
        };
        let half = vec3(world.cell_size * 0.5, world.wall_height * 0.5, world.cell_size * 0.5);
        for row in 0..maze.layout.rows() {
            for col in 0..maze.layout.cols() {
                if maze.layout.cell(row, col) == Some(Cell::Wall) {
                    let center = maze.cell_center(row, col) + Vec3::Y * half.y;
                    let id = maze.walls.len();
                    maze.walls.push(Wall { id, row, col, aabb: Aabb::from_center(center, half) });
                }
            }
        }
        maze.spawn_point = maze.find_spawn_point() + Vec3::Y * eye_height;
        log::debug!(
            "maze built: {}x{} cells, {} walls, spawn {:?}",
            maze.layout.rows(),
            maze.layout.cols(),
            maze.walls.len(),
            maze.spawn_point
        );
        maze
    }

    /// Floor-level center of a grid cell, offset so the maze is centered on
    /// the origin.
    pub fn cell_center(&self, row: usize, col: usize) -> Vec3 {
        let cols = self.layout.cols() as f32;
        let rows = self.layout.rows() as f32;
        vec3(
            (col as f32 - cols / 2.0) * self.cell_size,
            0.0,
            (row as f32 - rows / 2.0) * self.cell_size,
        )
    }

    fn find_spawn_point(&self) -> Vec3 {
        let rows = self.layout.rows();
        let cols = self.layout.cols();
        for row in 1..rows.saturating_sub(1) {
            for col in 1..cols.saturating_sub(1) {
                if self.layout.cell(row, col) != Some(Cell::Empty) {
                    continue;
                }
                let p = self.cell_center(row, col);
                let clear = self.walls.iter().all(|w| {
                    let c = w.aabb.center();
                    vec3(c.x - p.x, 0.0, c.z - p.z).length() >= SPAWN_CLEARANCE
                });
                if clear {
                    return p;
                }
            }
        }
        log::warn!("no clear interior cell; using fallback spawn {:?}", FALLBACK_SPAWN_CELL);
        self.cell_center(FALLBACK_SPAWN_CELL.0, FALLBACK_SPAWN_CELL.1)
    }

    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn spawn_point(&self) -> Vec3 {
        self.spawn_point
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// True when a sphere at `point` touches any wall.
    pub fn collides(&self, point: Vec3, radius: f32) -> bool {
        self.walls.iter().any(|w| test_collision(point, radius, &w.aabb).collides)
    }

    /// Distance to the nearest wall along `dir` (unit) within `max_t`.
    pub fn first_wall_hit(&self, origin: Vec3, dir: Vec3, max_t: f32) -> Option<f32> {
        self.walls
            .iter()
            .filter_map(|w| w.aabb.ray_hit(origin, dir, max_t))
            .min_by(|a, b| a.total_cmp(b))
    }

    /// No wall intersection nearer than `to`.
    pub fn line_of_sight(&self, from: Vec3, to: Vec3) -> bool {
        let delta = to - from;
        let dist = delta.length();
        if dist <= 1e-6 {
            return true;
        }
        self.first_wall_hit(from, delta / dist, dist).is_none()
    }

    /// Horizontal clamp to the map bounds.
    pub fn clamp_to_bounds(&self, p: Vec3) -> Vec3 {
        vec3(
            p.x.clamp(-self.half_extent, self.half_extent),
            p.y,
            p.z.clamp(-self.half_extent, self.half_extent),
        )
    }

    pub fn in_bounds(&self, p: Vec3) -> bool {
        p.x.abs() <= self.half_extent && p.z.abs() <= self.half_extent
    }
}
