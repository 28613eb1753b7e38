use goban_protocol::{Color, Coord, Coord2, Snapshot};

use crate::grid::BoardGeometry;
use crate::phase::Phase;

/// Stone radius as a fraction of the grid step.
pub const STONE_RADIUS_FACTOR: f64 = 0.45;
/// Half-diagonal of the dead-stone X mark as a fraction of the grid step.
pub const DEAD_MARK_FACTOR: f64 = 0.3;

/// Star point lines of the standard 19-line board.
const STAR_LINES: [Coord; 3] = [3, 9, 15];

/// Drawing capability the render projection targets. Backends are free in how
/// they realize each mark (a solid fill is as valid as a shaded one); tests
/// use a recording fake.
pub trait Surface {
    fn clear(&mut self);
    fn grid_line(&mut self, from: (f64, f64), to: (f64, f64));
    fn star_point(&mut self, center: (f64, f64));
    fn stone(&mut self, center: (f64, f64), radius: f64, color: Color);
    fn dead_mark(&mut self, center: (f64, f64), arm: f64);
    fn ghost_stone(&mut self, center: (f64, f64), radius: f64, color: Color);
}

/// Project the board onto a surface, back to front: grid, star points,
/// stones, dead marks (scoring only), hover ghost (normal play only).
/// With no snapshot yet, only the empty grid renders.
pub fn draw_board(
    surface: &mut dyn Surface,
    geometry: &BoardGeometry,
    snapshot: Option<&Snapshot>,
    hover: Option<Coord2>,
) {
    surface.clear();
    draw_grid(surface, geometry);

    let Some(snapshot) = snapshot else {
        return;
    };
    let phase = Phase::of(snapshot);
    let radius = geometry.step() * STONE_RADIUS_FACTOR;

    for (x, column) in snapshot.board.iter().enumerate() {
        for (y, &mark) in column.iter().enumerate() {
            if mark.is_stone() {
                surface.stone(geometry.to_px((x as Coord, y as Coord)), radius, mark);
            }
        }
    }

    if phase == Phase::Scoring {
        let arm = geometry.step() * DEAD_MARK_FACTOR;
        for point in &snapshot.dead {
            surface.dead_mark(geometry.to_px((point.x, point.y)), arm);
        }
    }

    if phase == Phase::Normal {
        if let Some(cell) = hover {
            surface.ghost_stone(geometry.to_px(cell), radius, snapshot.turn);
        }
    }
}

fn draw_grid(surface: &mut dyn Surface, geometry: &BoardGeometry) {
    let near = geometry.margin();
    let far = geometry.side() - geometry.margin();

    for line in 0..geometry.lines() {
        let at = geometry.margin() + line as f64 * geometry.step();
        surface.grid_line((at, near), (at, far));
        surface.grid_line((near, at), (far, at));
    }

    if geometry.lines() == 19 {
        for x in STAR_LINES {
            for y in STAR_LINES {
                surface.star_point(geometry.to_px((x, y)));
            }
        }
    }
}
