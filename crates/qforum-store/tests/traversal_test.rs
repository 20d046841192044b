// Integration tests for relationship traversal, the association
// resolvers, the ranking queries, and the karma metric.

use qforum_core::model::{Question, Reply, User};
use qforum_core::ForumError;
use qforum_store::repo::{FollowRepo, LikeRepo, QuestionRepo, ReplyRepo, UserRepo};
use rusqlite::Connection;

struct Fixture {
    conn: Connection,
    yogi: i64,
    boo: i64,
    ranger: i64,
    q_picnic: i64,
    q_honey: i64,
    q_river: i64,
}

// Seed layout:
//   yogi authors q_picnic and q_honey, boo authors q_river.
//   Follows: q_picnic <- {boo, ranger}, q_honey <- {ranger}, q_river <- {yogi}.
//   Likes:   q_picnic <- {boo, ranger}, q_honey <- {ranger}, q_river <- {}.
fn seed_forum() -> Fixture {
    let mut conn = qforum_store::db::open_in_memory().unwrap();
    qforum_store::db::configure(&conn).unwrap();
    qforum_store::migrations::apply_migrations(&mut conn).unwrap();

    let mut yogi = User::new("Yogi", "Bear");
    let mut boo = User::new("Boo", "Boo");
    let mut ranger = User::new("Ranger", "Smith");
    for user in [&mut yogi, &mut boo, &mut ranger] {
        UserRepo::save(&conn, user).unwrap();
    }
    let (yogi, boo, ranger) = (yogi.id.unwrap(), boo.id.unwrap(), ranger.id.unwrap());

    let mut q_picnic = Question::new("Best picnic spots?", "Asking for baskets.", yogi);
    let mut q_honey = Question::new("Where to buy honey?", "In bulk.", yogi);
    let mut q_river = Question::new("Is the river safe?", "For swimming.", boo);
    for question in [&mut q_picnic, &mut q_honey, &mut q_river] {
        QuestionRepo::save(&conn, question).unwrap();
    }
    let (q_picnic, q_honey, q_river) = (
        q_picnic.id.unwrap(),
        q_honey.id.unwrap(),
        q_river.id.unwrap(),
    );

    FollowRepo::follow(&conn, boo, q_picnic).unwrap();
    FollowRepo::follow(&conn, ranger, q_picnic).unwrap();
    FollowRepo::follow(&conn, ranger, q_honey).unwrap();
    FollowRepo::follow(&conn, yogi, q_river).unwrap();

    LikeRepo::like(&conn, boo, q_picnic).unwrap();
    LikeRepo::like(&conn, ranger, q_picnic).unwrap();
    LikeRepo::like(&conn, ranger, q_honey).unwrap();

    Fixture {
        conn,
        yogi,
        boo,
        ranger,
        q_picnic,
        q_honey,
        q_river,
    }
}

#[test]
fn test_authored_questions_and_replies() {
    let f = seed_forum();

    let questions = UserRepo::authored_questions(&f.conn, f.yogi).unwrap();
    assert_eq!(questions.len(), 2);
    assert!(questions.iter().all(|q| q.author_id == f.yogi));

    let mut reply = Reply::new("Jellystone, obviously.", None, f.q_picnic, f.boo);
    ReplyRepo::save(&f.conn, &mut reply).unwrap();

    let replies = UserRepo::authored_replies(&f.conn, f.boo).unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].question_id, f.q_picnic);
}

#[test]
fn test_followers_and_followed_questions() {
    let f = seed_forum();

    let followers = QuestionRepo::followers(&f.conn, f.q_picnic).unwrap();
    let follower_ids: Vec<i64> = followers.iter().map(|u| u.id.unwrap()).collect();
    assert_eq!(follower_ids, vec![f.boo, f.ranger]);

    let followed = UserRepo::followed_questions(&f.conn, f.ranger).unwrap();
    let followed_ids: Vec<i64> = followed.iter().map(|q| q.id.unwrap()).collect();
    assert_eq!(followed_ids, vec![f.q_picnic, f.q_honey]);
}

#[test]
fn test_most_followed_orders_by_count_then_id() {
    let f = seed_forum();

    // q_picnic has 2 followers; q_honey and q_river tie at 1 and resolve
    // by ascending id.
    let ranked = QuestionRepo::most_followed(&f.conn, 5).unwrap();
    let ids: Vec<i64> = ranked.iter().map(|q| q.id.unwrap()).collect();
    assert_eq!(ids, vec![f.q_picnic, f.q_honey, f.q_river]);

    let top_one = QuestionRepo::most_followed(&f.conn, 1).unwrap();
    assert_eq!(top_one.len(), 1);
    assert_eq!(top_one[0].id, Some(f.q_picnic));
}

#[test]
fn test_likers_num_likes_and_liked_questions() {
    let f = seed_forum();

    let likers = QuestionRepo::likers(&f.conn, f.q_picnic).unwrap();
    let liker_ids: Vec<i64> = likers.iter().map(|u| u.id.unwrap()).collect();
    assert_eq!(liker_ids, vec![f.boo, f.ranger]);

    assert_eq!(QuestionRepo::num_likes(&f.conn, f.q_picnic).unwrap(), 2);
    assert_eq!(QuestionRepo::num_likes(&f.conn, f.q_river).unwrap(), 0);

    let liked = UserRepo::liked_questions(&f.conn, f.ranger).unwrap();
    let liked_ids: Vec<i64> = liked.iter().map(|q| q.id.unwrap()).collect();
    assert_eq!(liked_ids, vec![f.q_picnic, f.q_honey]);
}

#[test]
fn test_most_liked_excludes_unliked_questions() {
    let f = seed_forum();

    let ranked = QuestionRepo::most_liked(&f.conn, 5).unwrap();
    let ids: Vec<i64> = ranked.iter().map(|q| q.id.unwrap()).collect();
    assert_eq!(ids, vec![f.q_picnic, f.q_honey]);

    let top_one = QuestionRepo::most_liked(&f.conn, 1).unwrap();
    assert_eq!(top_one.len(), 1);
    assert_eq!(top_one[0].id, Some(f.q_picnic));
}

#[test]
fn test_average_karma() {
    let f = seed_forum();

    // yogi: 2 distinct questions, 3 likes across them
    let karma = UserRepo::average_karma(&f.conn, f.yogi).unwrap();
    assert!((karma - 2.0 / 3.0).abs() < 1e-9);

    // boo authored q_river, which has no likes
    assert_eq!(UserRepo::average_karma(&f.conn, f.boo).unwrap(), 0.0);

    // ranger authored nothing at all
    assert_eq!(UserRepo::average_karma(&f.conn, f.ranger).unwrap(), 0.0);
}

#[test]
fn test_average_karma_counts_unliked_questions_in_denominator() {
    let f = seed_forum();

    // cindy authors two questions; only one of them gets a like. The
    // unliked question still contributes one to the denominator, so the
    // ratio is 2 questions / (1 like + 1 unliked) = 1.0, not 2.0.
    let mut cindy = User::new("Cindy", "Bear");
    UserRepo::save(&f.conn, &mut cindy).unwrap();
    let cindy = cindy.id.unwrap();

    let mut q_liked = Question::new("Dance partners?", "For the festival.", cindy);
    let mut q_unliked = Question::new("Umbrella repair?", "Mine broke.", cindy);
    QuestionRepo::save(&f.conn, &mut q_liked).unwrap();
    QuestionRepo::save(&f.conn, &mut q_unliked).unwrap();

    LikeRepo::like(&f.conn, f.boo, q_liked.id.unwrap()).unwrap();

    let karma = UserRepo::average_karma(&f.conn, cindy).unwrap();
    assert!((karma - 1.0).abs() < 1e-9);
}

#[test]
fn test_reply_tree_one_level() {
    let f = seed_forum();

    let mut root = Reply::new("Jellystone.", None, f.q_picnic, f.boo);
    ReplyRepo::save(&f.conn, &mut root).unwrap();
    let root_id = root.id.unwrap();

    let mut child_a = Reply::new("Seconded.", Some(root_id), f.q_picnic, f.yogi);
    let mut child_b = Reply::new("Too crowded.", Some(root_id), f.q_picnic, f.ranger);
    ReplyRepo::save(&f.conn, &mut child_a).unwrap();
    ReplyRepo::save(&f.conn, &mut child_b).unwrap();

    let children = ReplyRepo::child_replies(&f.conn, root_id).unwrap();
    let child_ids: Vec<Option<i64>> = children.iter().map(|r| r.id).collect();
    assert_eq!(child_ids, vec![child_a.id, child_b.id]);

    // One level only: the grandparent query does not recurse
    let mut grandchild = Reply::new("It grew on me.", child_a.id, f.q_picnic, f.boo);
    ReplyRepo::save(&f.conn, &mut grandchild).unwrap();
    let children_after = ReplyRepo::child_replies(&f.conn, root_id).unwrap();
    assert_eq!(children_after.len(), 2);

    let parent = ReplyRepo::parent_reply(&f.conn, &child_a).unwrap().unwrap();
    assert_eq!(parent.id, Some(root_id));

    // Flat per-question listing includes the whole thread
    let all_replies = QuestionRepo::replies(&f.conn, f.q_picnic).unwrap();
    assert_eq!(all_replies.len(), 4);
}

#[test]
fn test_duplicate_like_is_a_constraint_violation() {
    let f = seed_forum();

    let err = LikeRepo::like(&f.conn, f.boo, f.q_picnic).unwrap_err();
    assert!(matches!(err, ForumError::ConstraintViolation { .. }));
}

#[test]
fn test_unfollow_and_unlike_report_whether_a_row_existed() {
    let f = seed_forum();

    assert!(FollowRepo::unfollow(&f.conn, f.boo, f.q_picnic).unwrap());
    assert!(!FollowRepo::unfollow(&f.conn, f.boo, f.q_picnic).unwrap());

    assert!(LikeRepo::unlike(&f.conn, f.ranger, f.q_honey).unwrap());
    assert!(!LikeRepo::unlike(&f.conn, f.ranger, f.q_honey).unwrap());
    assert_eq!(QuestionRepo::num_likes(&f.conn, f.q_honey).unwrap(), 0);
}
