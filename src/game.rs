//! Game orchestration: builds the maze, routes input to the camera and
//! tracks the win condition.

use log::info;
use rand::Rng;

use crate::camera::Camera;
use crate::math::vec3::Vec3;
use crate::objects::Cuboid;
use crate::scene::{ObjectId, Scene};
use crate::window::InputAction;

const PILLAR_COUNT: usize = 25;
const GOAL_LOCATION: Vec3 = Vec3::new(-30.0, 0.0, -30.0);
/// Minimum per-axis distance between a new pillar and anything placed
/// before it (other pillars, the goal, the spawn point).
const PILLAR_SPACING: f32 = 4.0;

pub struct Game {
    scene: Scene,
    camera: Camera,
    goal: ObjectId,
    won: bool,
}

impl Game {
    /// Builds the walled arena: a rectangular perimeter of wall segments,
    /// the goal cuboid in the far corner and randomly scattered pillars.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut scene = Scene::new();

        // North and south walls, 20 segments each.
        for i in 0..20 {
            let x = -34.0 + 2.0 * i as f32;
            scene.add(Box::new(Cuboid::wall(
                Vec3::new(x, 0.0, -35.5),
                Some(Vec3::new(2.0, 2.0, 1.0)),
            )));
        }
        for i in 0..20 {
            let x = -34.0 + 2.0 * i as f32;
            scene.add(Box::new(Cuboid::wall(
                Vec3::new(x, 0.0, 5.5),
                Some(Vec3::new(2.0, 2.0, 1.0)),
            )));
        }
        // West and east walls.
        for i in 0..20 {
            let z = -34.0 + 2.0 * i as f32;
            scene.add(Box::new(Cuboid::wall(
                Vec3::new(-34.5, 0.0, z),
                Some(Vec3::new(1.0, 2.0, 2.0)),
            )));
        }
        for i in 0..20 {
            let z = -34.0 + 2.0 * i as f32;
            scene.add(Box::new(Cuboid::wall(
                Vec3::new(4.5, 0.0, z),
                Some(Vec3::new(1.0, 2.0, 2.0)),
            )));
        }

        let goal = scene.add(Box::new(Cuboid::goal(
            GOAL_LOCATION,
            Some(Vec3::new(0.25, 0.25, 0.25)),
        )));

        // Scatter pillars, keeping them clear of the goal, the spawn point
        // and each other.
        let camera = Camera::new();
        let mut occupied = vec![GOAL_LOCATION, camera.position()];
        for _ in 0..PILLAR_COUNT {
            let spot = loop {
                let x = rng.random::<f32>() * 30.0 - 30.0;
                let z = rng.random::<f32>() * 30.0 - 30.0;
                if occupied
                    .iter()
                    .all(|v| (v.x - x).abs() >= PILLAR_SPACING || (v.z - z).abs() >= PILLAR_SPACING)
                {
                    break Vec3::new(x, 0.0, z);
                }
            };
            occupied.push(spot);
            scene.add(Box::new(Cuboid::pillar(spot, Some(Vec3::new(1.0, 2.0, 1.0)))));
        }

        info!("arena built: {} objects", scene.len());

        Self {
            scene,
            camera,
            goal,
            won: false,
        }
    }

    /// Applies one discrete input action. A move blocked by the goal object
    /// wins the game.
    pub fn handle_input(&mut self, action: InputAction) {
        let blocker = match action {
            InputAction::MoveForward => self.camera.move_forward(&self.scene),
            InputAction::MoveBackward => self.camera.move_backward(&self.scene),
            InputAction::MoveLeft => self.camera.move_left(&self.scene),
            InputAction::MoveRight => self.camera.move_right(&self.scene),
            InputAction::LookUp => {
                self.camera.look_up();
                None
            }
            InputAction::LookDown => {
                self.camera.look_down();
                None
            }
            InputAction::LookLeft => {
                self.camera.look_left();
                None
            }
            InputAction::LookRight => {
                self.camera.look_right();
                None
            }
        };

        if blocker == Some(self.goal) && !self.won {
            self.won = true;
            info!("goal reached at {:?}", self.camera.position());
        }
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game() -> Game {
        Game::new(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn arena_has_walls_goal_and_pillars() {
        let game = game();
        assert_eq!(game.scene().len(), 80 + 1 + PILLAR_COUNT);
        assert!(!game.won());
    }

    #[test]
    fn spawn_point_is_clear() {
        let game = game();
        assert!(game.scene().first_hit(game.camera().position()).is_none());
    }

    #[test]
    fn walking_into_the_goal_wins() {
        let mut game = game();
        // Drop the camera just outside the goal's collision margin, still
        // facing -Z, and step toward it. Pillar spacing guarantees this
        // corridor stays clear regardless of the seed.
        game.camera_mut().set_position(Vec3::new(-30.0, 0.0, -28.0));
        assert!(game.scene().first_hit(game.camera().position()).is_none());

        for _ in 0..10 {
            game.handle_input(InputAction::MoveForward);
            if game.won() {
                break;
            }
        }
        assert!(game.won());
        // The blocked step left the camera outside the goal footprint.
        assert!(game.camera().position().z > -28.375);
    }

    #[test]
    fn looking_around_never_moves_the_camera() {
        let mut game = game();
        let start = game.camera().position();
        for action in [
            InputAction::LookUp,
            InputAction::LookDown,
            InputAction::LookLeft,
            InputAction::LookRight,
        ] {
            game.handle_input(action);
        }
        assert_eq!(game.camera().position(), start);
    }
}
