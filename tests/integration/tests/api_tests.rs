//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, expired_token, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use store_core::UserRole;

/// Sign up a fresh account and return it with a bearer token
async fn create_account(server: &TestServer, admin: bool) -> (SignupRequest, String) {
    let signup = if admin {
        SignupRequest::unique_admin()
    } else {
        SignupRequest::unique()
    };

    let response = server.post("/signup", &signup).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login = LoginRequest::from_signup(&signup);
    let response = server.post("/token", &login).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (signup, token.access_token)
}

/// Create a catalog entry as admin and return its response
async fn create_cloth(
    server: &TestServer,
    admin_token: &str,
    request: &CreateClothRequest,
) -> ClothResponse {
    let response = server.post_auth("/add-cloth", admin_token, request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/signup", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.role, "user");
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    server.post("/signup", &request).await.unwrap();

    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_signup_duplicate_username_case_insensitive() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SignupRequest::unique();

    server.post("/signup", &request).await.unwrap();

    // Same name with different casing collides
    request.username = request.username.to_uppercase();
    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_signup_short_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest {
        username: "ab".to_string(),
        password: "TestPass123!".to_string(),
        role: None,
    };

    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_signup_username_must_start_with_letter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest {
        username: "1user".to_string(),
        password: "TestPass123!".to_string(),
        role: None,
    };

    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_signup_weak_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest {
        username: format!("testuser{}", unique_suffix()),
        password: "password".to_string(),
        role: None,
    };

    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();
    server.post("/signup", &signup).await.unwrap();

    let login = LoginRequest::from_signup(&signup);
    let response = server.post("/token", &login).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!token.access_token.is_empty());
    assert_eq!(token.token_type, "bearer");
    assert!(token.expires_in > 0);
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();
    server.post("/signup", &signup).await.unwrap();

    let login = LoginRequest {
        username: signup.username.clone(),
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/token", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_unknown_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        username: format!("nobody{}", unique_suffix()),
        password: "TestPass123!".to_string(),
    };

    let response = server.post("/token", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (signup, token) = create_account(&server, false).await;

    let response = server.get_auth("/users/me", &token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, signup.username);
    assert_eq!(user.role, "user");
}

#[tokio::test]
async fn test_verify_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (signup, token) = create_account(&server, false).await;

    let response = server.get_auth("/token/verify", &token).await.unwrap();
    let verify: TokenVerifyResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(verify.username, signup.username);
    assert_eq!(verify.role, "user");
    assert!(verify.expires_at > chrono::Utc::now().timestamp());
}

#[tokio::test]
async fn test_expired_token_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = expired_token("someone", UserRole::Admin).unwrap();

    let response = server.get_auth("/users/me", &token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_missing_token_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_auth("/users/me", "not.a.token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = create_account(&server, false).await;

    let response = server
        .post_auth("/logout", &token, &serde_json::json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_add_cloth_as_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;

    let request = CreateClothRequest::unique();
    let cloth = create_cloth(&server, &admin, &request).await;

    assert_eq!(cloth.name, request.name);
    assert_eq!(cloth.kind, "tops");
    assert_eq!(cloth.size, "M");
    assert!(cloth.is_active);
    assert!(cloth.deleted_at.is_none());
}

#[tokio::test]
async fn test_add_cloth_as_user_forbidden() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user) = create_account(&server, false).await;

    let request = CreateClothRequest::unique();
    let response = server.post_auth("/add-cloth", &user, &request).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_add_cloth_anonymous_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateClothRequest::unique();

    let response = server.post("/add-cloth", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_cloth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;
    let created = create_cloth(&server, &admin, &CreateClothRequest::unique()).await;

    // Reads are open, no token needed
    let response = server.get(&format!("/cloth/{}", created.id)).await.unwrap();
    let fetched: ClothResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);
}

#[tokio::test]
async fn test_get_unknown_cloth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/cloth/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_cloth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;
    let created = create_cloth(&server, &admin, &CreateClothRequest::unique()).await;

    let patch = UpdateClothRequest {
        price: Some(19.99),
        size: Some("L".to_string()),
        ..Default::default()
    };
    let response = server
        .put_auth(&format!("/update-cloth/{}", created.id), &admin, &patch)
        .await
        .unwrap();
    let updated: ClothResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.price, 19.99);
    assert_eq!(updated.size, "L");
    assert_eq!(updated.name, created.name);
}

#[tokio::test]
async fn test_update_cloth_negative_price() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;
    let created = create_cloth(&server, &admin, &CreateClothRequest::unique()).await;

    let patch = UpdateClothRequest {
        price: Some(-1.0),
        ..Default::default()
    };
    let response = server
        .put_auth(&format!("/update-cloth/{}", created.id), &admin, &patch)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Soft-Delete Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_soft_delete_then_restore() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;
    let created = create_cloth(&server, &admin, &CreateClothRequest::unique()).await;

    // Soft delete
    let response = server
        .delete_auth(&format!("/delete-cloth/{}", created.id), &admin)
        .await
        .unwrap();
    let deleted: ClothResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!deleted.is_active);
    assert!(deleted.deleted_at.is_some());

    // Restore
    let response = server
        .put_auth_empty(&format!("/restore-cloth/{}", created.id), &admin)
        .await
        .unwrap();
    let restored: ClothResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(restored.is_active);
    assert!(restored.deleted_at.is_none());
    assert!(restored.restored_at.is_some());
}

#[tokio::test]
async fn test_double_soft_delete() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;
    let created = create_cloth(&server, &admin, &CreateClothRequest::unique()).await;

    let response = server
        .delete_auth(&format!("/delete-cloth/{}", created.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Second delete is a no-op and reads as missing
    let response = server
        .delete_auth(&format!("/delete-cloth/{}", created.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_restore_active_cloth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;
    let created = create_cloth(&server, &admin, &CreateClothRequest::unique()).await;

    // Restoring an entry that was never deleted reads as missing
    let response = server
        .put_auth_empty(&format!("/restore-cloth/{}", created.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_deleted_cloth_in_deleted_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;
    let created = create_cloth(&server, &admin, &CreateClothRequest::unique()).await;

    server
        .delete_auth(&format!("/delete-cloth/{}", created.id), &admin)
        .await
        .unwrap();

    let response = server.get("/list-deleted-clothes").await.unwrap();
    let deleted: Vec<ClothResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(deleted.iter().any(|c| c.id == created.id));

    let response = server.get("/list-active-clothes").await.unwrap();
    let active: Vec<ClothResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!active.iter().any(|c| c.id == created.id));
}

// ============================================================================
// Filtering and Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_filter_by_price_range() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;

    let cheap = create_cloth(&server, &admin, &CreateClothRequest::with_price(10.0)).await;
    let mid = create_cloth(&server, &admin, &CreateClothRequest::with_price(50.0)).await;
    let dear = create_cloth(&server, &admin, &CreateClothRequest::with_price(90.0)).await;

    let response = server
        .get("/filter-clothes?min_price=20&max_price=60")
        .await
        .unwrap();
    let filtered: Vec<ClothResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(filtered.iter().any(|c| c.id == mid.id));
    assert!(!filtered.iter().any(|c| c.id == cheap.id));
    assert!(!filtered.iter().any(|c| c.id == dear.id));
}

#[tokio::test]
async fn test_filter_inverted_price_range() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/filter-clothes?min_price=60&max_price=20")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_paginated_sorted_by_price() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;

    create_cloth(&server, &admin, &CreateClothRequest::with_price(15.0)).await;
    create_cloth(&server, &admin, &CreateClothRequest::with_price(45.0)).await;
    create_cloth(&server, &admin, &CreateClothRequest::with_price(25.0)).await;

    let response = server
        .get("/paginated-clothes?sort_by=price&sort_order=desc&limit=100")
        .await
        .unwrap();
    let page: Vec<ClothResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!page.is_empty());
    assert!(page.windows(2).all(|w| w[0].price >= w[1].price));
}

#[tokio::test]
async fn test_paginated_unknown_sort_field() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/paginated-clothes?sort_by=password")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_paginated_limit_is_clamped() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // An oversized limit is clamped, not rejected
    let response = server.get("/paginated-clothes?limit=5000").await.unwrap();
    let page: Vec<ClothResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.len() <= 100);
}

// ============================================================================
// User Administration Tests
// ============================================================================

#[tokio::test]
async fn test_list_users_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user) = create_account(&server, false).await;

    let response = server.get_auth("/users", &user).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_list_users_as_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (signup, admin) = create_account(&server, true).await;

    let response = server.get_auth("/users", &admin).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().any(|u| u.username == signup.username));
}

#[tokio::test]
async fn test_delete_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = create_account(&server, true).await;

    let target = SignupRequest::unique();
    let response = server.post("/signup", &target).await.unwrap();
    let target_user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/delete-user/{}", target_user.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Deleted accounts can no longer log in
    let login = LoginRequest::from_signup(&target);
    let response = server.post("/token", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_delete_own_account_forbidden() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (signup, admin) = create_account(&server, true).await;

    let response = server.get_auth("/users/me", &admin).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.username, signup.username);

    let response = server
        .delete_auth(&format!("/delete-user/{}", me.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
