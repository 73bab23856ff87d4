use common::sample::{activity_feed, social_posts};
use yew::prelude::*;

/// Static sample posts; no live source behind it.
#[function_component(SocialFeed)]
pub fn social_feed() -> Html {
    html! {
        <div id="socialFeed" class="feed">
            { for social_posts().into_iter().map(|post| html! {
                <div class="feed-item">
                    <div class="avatar">{post.avatar()}</div>
                    <div class="feed-content">
                        <strong>{post.user}</strong>
                        <p>{post.text}</p>
                    </div>
                </div>
            })}
        </div>
    }
}

#[function_component(ActivityFeed)]
pub fn activity_feed_panel() -> Html {
    html! {
        <div id="activityFeed" class="feed">
            { for activity_feed().into_iter().map(|item| html! {
                <div class="feed-item"><p>{item}</p></div>
            })}
        </div>
    }
}
