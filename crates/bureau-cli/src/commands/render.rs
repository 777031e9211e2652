//! Plain-text rendering of engine results

use bureau_core::{Like, Message, User};

pub fn print_profile(user: &User) {
    println!("Profile {}:", user.id);
    println!("  name: {}", user.name);
    println!("  age: {}", user.age);
    println!("  gender: {}", user.gender);
    println!("  interests: {}", user.interests);
    println!("  photo: {}", user.photo);
}

/// One line per profile, in the order given
pub fn print_profile_list(users: &[User]) {
    if users.is_empty() {
        println!("No profiles found");
        return;
    }
    for user in users {
        println!(
            "{}\t{}, {}, {}, {}",
            user.id, user.name, user.age, user.gender, user.interests
        );
    }
}

pub fn print_messages(messages: &[Message]) {
    if messages.is_empty() {
        println!("No messages");
        return;
    }
    for message in messages {
        println!(
            "{} -> {}: {}",
            message.sender_id, message.receiver_id, message.body
        );
    }
}

pub fn print_likes(likes: &[Like]) {
    if likes.is_empty() {
        println!("No likes given");
        return;
    }
    for like in likes {
        println!("{} -> {}", like.liker_id, like.liked_id);
    }
}
