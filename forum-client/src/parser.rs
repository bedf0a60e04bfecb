use scraper::{ElementRef, Html, Selector};
use threadlens_core::Comment;

/// Fixed phrase the forum renders on a thread page that has no comments yet
/// ("be the first to comment"). Its presence ends pagination.
pub const STOP_PHRASE: &str = "成为第一个写评论的人";

/// What one page of thread markup yielded. Comments are in document order.
#[derive(Debug, Default)]
pub struct ParsedPage {
    pub post_content: Option<String>,
    pub found_stop: bool,
    pub comments: Vec<Comment>,
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Parse one page of the forum's markup with the site's fixed selectors.
/// An empty post-content region counts as absent.
pub fn parse_page(html: &str) -> ParsedPage {
    let doc = Html::parse_document(html);

    let post_content_sel = Selector::parse(".post-content").expect("valid selector");
    let callout_sel = Selector::parse(".comment-callout").expect("valid selector");
    let comment_sel = Selector::parse(".comment").expect("valid selector");
    let author_sel = Selector::parse(".comment-author").expect("valid selector");
    let body_sel = Selector::parse(".comment-body").expect("valid selector");
    let time_sel = Selector::parse(".comment-meta time").expect("valid selector");

    let post_content = doc
        .select(&post_content_sel)
        .next()
        .map(element_text)
        .filter(|s| !s.is_empty());

    let found_stop = doc
        .select(&callout_sel)
        .any(|el| element_text(el).contains(STOP_PHRASE));

    let comments = doc
        .select(&comment_sel)
        .map(|comment_el| {
            let author = comment_el
                .select(&author_sel)
                .next()
                .map(element_text)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Unknown".to_string());
            let body = comment_el
                .select(&body_sel)
                .next()
                .map(element_text)
                .unwrap_or_default();
            let time = comment_el
                .select(&time_sel)
                .next()
                .and_then(|el| el.value().attr("datetime"))
                .unwrap_or("")
                .to_string();
            Comment { author, time, body }
        })
        .collect();

    ParsedPage {
        post_content,
        found_stop,
        comments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"
        <html><body>
          <div class="post-content">
            How do you all feel about the new release?
          </div>
          <div class="comment">
            <span class="comment-author">alice</span>
            <div class="comment-meta"><time datetime="2024-05-01T10:00:00Z">May 1</time></div>
            <div class="comment-body">Love it.</div>
          </div>
          <div class="comment">
            <div class="comment-body">No author on this one</div>
          </div>
        </body></html>
    "#;

    #[test]
    fn extracts_post_content_and_comments() {
        let page = parse_page(FULL_PAGE);
        assert_eq!(
            page.post_content.as_deref(),
            Some("How do you all feel about the new release?")
        );
        assert!(!page.found_stop);
        assert_eq!(page.comments.len(), 2);
        assert_eq!(page.comments[0].author, "alice");
        assert_eq!(page.comments[0].time, "2024-05-01T10:00:00Z");
        assert_eq!(page.comments[0].body, "Love it.");
    }

    #[test]
    fn missing_author_and_time_fall_back() {
        let page = parse_page(FULL_PAGE);
        let second = &page.comments[1];
        assert_eq!(second.author, "Unknown");
        assert_eq!(second.time, "");
        assert_eq!(second.body, "No author on this one");
    }

    #[test]
    fn detects_stop_sentinel_inside_callout_text() {
        let html = format!(
            r#"<div class="comment-callout">快来{}吧！</div>"#,
            STOP_PHRASE
        );
        let page = parse_page(&html);
        assert!(page.found_stop);
    }

    #[test]
    fn callout_without_phrase_is_not_a_stop() {
        let page = parse_page(r#"<div class="comment-callout">评论已关闭</div>"#);
        assert!(!page.found_stop);
    }

    #[test]
    fn empty_post_content_counts_as_absent() {
        let page = parse_page(r#"<div class="post-content">   </div>"#);
        assert!(page.post_content.is_none());
    }

    #[test]
    fn empty_comment_body_stays_empty() {
        let page = parse_page(
            r#"<div class="comment"><span class="comment-author">bob</span></div>"#,
        );
        assert_eq!(page.comments[0].author, "bob");
        assert_eq!(page.comments[0].body, "");
    }
}
