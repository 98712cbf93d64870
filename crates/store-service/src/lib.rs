//! # store-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ClothResponse, CreateClothRequest, FilterQuery, HealthResponse, LoginRequest, MessageResponse,
    PageQuery, ReadinessResponse, SignupRequest, TokenVerifyResponse, UpdateClothRequest,
    UserResponse,
};
pub use services::{
    AuthService, CatalogService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
