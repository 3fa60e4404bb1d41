use crate::game_of_life::GridError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("The starting pattern can only be edited while the simulation is stopped")]
    NotEditing,

    #[error("The simulation is not running")]
    NotRunning,

    #[error("The simulation is already running")]
    AlreadyRunning,

    #[error(transparent)]
    Grid(#[from] GridError),
}
