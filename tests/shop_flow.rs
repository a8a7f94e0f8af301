use axum::extract::{Path, Query, State};
use axum_shop_api::{
    db::{create_orm_conn, run_migrations},
    dto::cart::UpdateCartItemRequest,
    entity::products::ActiveModel as ProductActive,
    error::AppError,
    routes::actions::unified_action,
    routes::params::ActionQuery,
    services::{cart_service, favorite_service, product_service, view_service},
    state::AppState,
};
use chrono::DateTime;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};

// Integration flow: favorites, cart mutations, view history, search, paging,
// and the unified action endpoint. Runs as one test because each stage
// assumes the table state the previous reset left behind.
#[tokio::test]
async fn storefront_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    favorites_cart_and_views(&state).await?;

    reset_tables(&state).await?;
    unified_action_endpoint(&state).await?;

    Ok(())
}

async fn favorites_cart_and_views(state: &AppState) -> anyhow::Result<()> {
    // Seed three products with distinct creation times so ordering is stable.
    let older = insert_product(
        state,
        "나이키",
        "에어포스 1",
        139_000,
        5,
        false,
        "운동화",
        "2026-01-01T10:00:00+00:00",
    )
    .await?;
    let newer = insert_product(
        state,
        "아디다스",
        "가젤",
        99_000,
        2,
        false,
        "운동화",
        "2026-01-02T10:00:00+00:00",
    )
    .await?;
    let clamped = insert_product(
        state,
        "카시오",
        "F-91W",
        19_000,
        0,
        true,
        "시계",
        "2026-01-03T10:00:00+00:00",
    )
    .await?;

    // Favorite toggle moves the like counter with the flag.
    let toggled = favorite_service::toggle_favorite(state, older.id).await?;
    assert!(toggled.is_favorite);
    assert_eq!(toggled.likes, 6);

    let toggled_back = favorite_service::toggle_favorite(state, older.id).await?;
    assert!(!toggled_back.is_favorite);
    assert_eq!(toggled_back.likes, 5);

    // Only flag-carrying products show up in the favorites listing.
    let favorites = favorite_service::favorite_products(state).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, clamped.id);

    // Un-favoriting a product with zero likes clamps at zero.
    let unclamped = favorite_service::toggle_favorite(state, clamped.id).await?;
    assert!(!unclamped.is_favorite);
    assert_eq!(unclamped.likes, 0);

    // cart-add creates, then accumulates.
    let (item, created) = cart_service::add_to_cart(state, 7, older.id, 2).await?;
    assert!(created);
    assert_eq!(item.quantity, 2);

    let (item, created) = cart_service::add_to_cart(state, 7, older.id, 3).await?;
    assert!(!created);
    assert_eq!(item.quantity, 5);

    let cart = cart_service::list_cart_items(state, Some(7)).await?;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity, 5);
    assert_eq!(cart[0].product.price, "139,000원");

    let combined = cart_service::cart_and_favorites(state, 7).await?;
    assert_eq!(combined.user_id, 7);
    assert_eq!(combined.cart_count, 1);
    assert_eq!(combined.favorites_count, 0);

    // cart-update on a missing pair is a silent no-op.
    let touched =
        cart_service::update_cart_item(state, 7, newer.id, UpdateCartItemRequest::quantity(9))
            .await?;
    assert_eq!(touched, 0);
    assert!(cart_service::cart_state(state, 7, newer.id).await?.is_none());

    // cart-update on the existing pair takes effect.
    let touched =
        cart_service::update_cart_item(state, 7, older.id, UpdateCartItemRequest::quantity(4))
            .await?;
    assert_eq!(touched, 1);
    let entry = cart_service::cart_state(state, 7, older.id).await?.unwrap();
    assert_eq!(entry.quantity, 4);

    // cart-remove is idempotent: the second call is a clean no-op.
    assert_eq!(cart_service::remove_from_cart(state, 7, older.id).await?, 1);
    assert_eq!(cart_service::remove_from_cart(state, 7, older.id).await?, 0);
    assert!(cart_service::cart_state(state, 7, older.id).await?.is_none());

    // No history yet: recent views falls back to the newest products.
    let fallback = view_service::recent_views(state, 99, 10).await?;
    assert_eq!(fallback.len(), 3);
    assert_eq!(fallback[0].id, clamped.id);

    // After a view is recorded only the viewed product comes back; repeat
    // views refresh the entry instead of duplicating it.
    view_service::record_view(state, 99, older.id).await?;
    view_service::record_view(state, 99, older.id).await?;
    let viewed = view_service::recent_views(state, 99, 10).await?;
    assert_eq!(viewed.len(), 1);
    assert_eq!(viewed[0].id, older.id);

    // Search matches product or brand name, case-insensitively.
    let hits = product_service::search_products(state, "나이키").await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, older.id);

    let hits = product_service::search_products(state, "f-91w").await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, clamped.id);

    // Pagination: newest first, at most `limit` items.
    let page = product_service::list_products(state, 0, 2, None).await?;
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, clamped.id);
    assert_eq!(page[1].id, newer.id);

    // Category filter, with `all` meaning no filter.
    let shoes = product_service::list_products(state, 0, 20, Some("운동화")).await?;
    assert_eq!(shoes.len(), 2);
    let everything = product_service::list_products(state, 0, 20, Some("all")).await?;
    assert_eq!(everything.len(), 3);

    // Ranking orders by likes.
    let ranked = product_service::ranking(state).await?;
    assert_eq!(ranked[0].id, older.id);

    // Missing product surfaces as NotFound.
    let missing = product_service::get_product(state, 999_999).await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    Ok(())
}

// The unified endpoint rejects unknown tokens before touching storage and
// answers with a consolidated summary otherwise.
async fn unified_action_endpoint(state: &AppState) -> anyhow::Result<()> {
    let product = insert_product(
        state,
        "리바이스",
        "501 청바지",
        109_000,
        0,
        false,
        "바지",
        "2026-02-01T10:00:00+00:00",
    )
    .await?;

    let rejected = unified_action(
        State(state.clone()),
        Path(("checkout".to_string(), product.id)),
        Query(ActionQuery {
            user_id: None,
            quantity: None,
        }),
    )
    .await;
    assert!(matches!(rejected, Err(AppError::BadRequest(_))));

    let response = unified_action(
        State(state.clone()),
        Path(("cart-add".to_string(), product.id)),
        Query(ActionQuery {
            user_id: Some(3),
            quantity: Some(2),
        }),
    )
    .await?;
    assert_eq!(response.0.body.code, "200");
    let summary = response.0.body.data.expect("action summary");
    assert!(summary.in_cart);
    assert_eq!(summary.cart_quantity, 2);
    assert!(!summary.is_favorite);
    assert_eq!(summary.product.price, "109,000원");
    assert_eq!(summary.product.discount, "15%");

    // `get` records the view for the calling user.
    unified_action(
        State(state.clone()),
        Path(("get".to_string(), product.id)),
        Query(ActionQuery {
            user_id: Some(3),
            quantity: None,
        }),
    )
    .await?;
    let viewed = view_service::recent_views(state, 3, 10).await?;
    assert_eq!(viewed.len(), 1);
    assert_eq!(viewed[0].id, product.id);

    // Acting on a product that does not exist is a 404.
    let missing = unified_action(
        State(state.clone()),
        Path(("favorite".to_string(), 999_999)),
        Query(ActionQuery {
            user_id: None,
            quantity: None,
        }),
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    let state = AppState::new(orm, "http://localhost:8001");
    reset_tables(&state).await?;
    Ok(state)
}

// Clean tables between stages.
async fn reset_tables(state: &AppState) -> anyhow::Result<()> {
    let backend = state.orm.get_database_backend();
    state
        .orm
        .execute(Statement::from_string(
            backend,
            "TRUNCATE TABLE cart_items, view_history, product_qa, product_reviews, products RESTART IDENTITY CASCADE",
        ))
        .await?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn insert_product(
    state: &AppState,
    brand_name: &str,
    product_name: &str,
    price: i64,
    likes: i64,
    is_favorite: bool,
    category: &str,
    created_at: &str,
) -> anyhow::Result<axum_shop_api::entity::products::Model> {
    let product = ProductActive {
        id: NotSet,
        brand_name: Set(brand_name.to_string()),
        product_name: Set(product_name.to_string()),
        image_url: Set(String::new()),
        price: Set(price),
        discount: Set(15),
        likes: Set(likes),
        reviews: Set("0".to_string()),
        is_favorite: Set(is_favorite),
        category: Set(category.to_string()),
        created_at: Set(DateTime::parse_from_rfc3339(created_at)?),
    }
    .insert(&state.orm)
    .await?;

    Ok(product)
}
