//! Data transfer objects for API endpoints

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateClothRequest, FilterQuery, LoginRequest, PageQuery, SignupRequest, UpdateClothRequest,
};
pub use responses::{
    ClothResponse, HealthResponse, MessageResponse, ReadinessResponse, TokenVerifyResponse,
    UserResponse,
};
