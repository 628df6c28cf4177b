use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GreenSphere API",
        version = "1.0.0",
        description = "Backend for the GreenSphere eco community.\n\n**Features:**\n- User signup\n- Action tracker with points and levels\n- Static eco tips\n- Climate news proxy\n- Forum posts, comments and replies\n- Carbon footprint records"
    ),
    paths(
        // Health
        crate::api::health::read_root,
        crate::api::health::health_check,

        // Users
        crate::api::users::signup,
        crate::api::users::list_users,

        // Tips
        crate::api::tips::get_tips,

        // Tracker
        crate::api::tracker::log_action,
        crate::api::tracker::get_user_tracker,
        crate::api::tracker::get_user_summary,
        crate::api::tracker::get_leaderboard,

        // News
        crate::api::news::get_eco_news,

        // Forum
        crate::api::forum::create_post,
        crate::api::forum::list_posts,
        crate::api::forum::add_comment,
        crate::api::forum::list_comments,
        crate::api::forum::add_reply,
        crate::api::forum::list_replies,

        // Carbon
        crate::api::carbon::record_footprint,
        crate::api::carbon::list_footprints,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::health::WelcomeResponse,
            crate::models::MessageResponse,
            crate::models::SignUpRequest,
            crate::models::UserResponse,
            crate::models::LogActionRequest,
            crate::models::TrackerEntryResponse,
            crate::models::UserSummary,
            crate::models::LeaderboardEntry,
            crate::models::Level,
            crate::models::CreatePostRequest,
            crate::models::ForumPostResponse,
            crate::models::CreateCommentRequest,
            crate::models::ForumCommentResponse,
            crate::models::CreateReplyRequest,
            crate::models::ForumReplyResponse,
            crate::models::CreateCarbonRequest,
            crate::models::CarbonRecordResponse,
            crate::services::tips_service::TipsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Welcome banner and database health."),
        (name = "Users", description = "Signup and user listing. Passwords are stored as received."),
        (name = "Tips", description = "Static eco tips by category."),
        (name = "Tracker", description = "Eco actions, point totals, levels and leaderboard."),
        (name = "News", description = "Climate news, relayed from the news provider."),
        (name = "Forum", description = "Community posts, comments and replies."),
        (name = "Carbon", description = "Carbon footprint records."),
    )
)]
pub struct ApiDoc;
