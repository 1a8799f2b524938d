pub mod cards;
pub mod form;
pub mod menu;
pub mod overlay;
pub mod particles;
pub mod reveal;
pub mod scroll;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub reduced_motion: bool,
    pub viewport_width: f64,
}

impl Environment {
    pub fn allows_motion(self) -> bool {
        !self.reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_disallows_motion() {
        let env = Environment {
            reduced_motion: true,
            viewport_width: 1280.0,
        };
        assert!(!env.allows_motion());
        assert!(Environment {
            reduced_motion: false,
            ..env
        }
        .allows_motion());
    }
}
