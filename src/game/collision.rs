//
// Copyright 2025 Jeff Bush
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//
// The player is pushed out of each overlapping platform along the axis with
// the smallest penetration. Ties go to the vertical axis, so landing on a
// corner puts the player on top rather than knocking them sideways.
//

use crate::platform::Platform;
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    // Pushed back out of the platform's left or right side.
    PushedLeft,
    PushedRight,
    Landed,
    HeadBump,
}

pub fn resolve_with_platform(player: &mut Player, platform: &Platform) -> Option<Contact> {
    let hb = player.bounding_box();
    let pb = platform.bounds();

    if !hb.overlaps(pb) {
        return None;
    }

    let overlap_left = hb.right() - pb.left;
    let overlap_right = pb.right() - hb.left;
    let overlap_top = hb.bottom() - pb.top;
    let overlap_bottom = pb.bottom() - hb.top;

    let min_overlap_x = overlap_left.min(overlap_right);
    let min_overlap_y = overlap_top.min(overlap_bottom);

    let contact = if min_overlap_x < min_overlap_y {
        if overlap_left < overlap_right {
            player.move_by(-overlap_left, 0.0);
            Contact::PushedLeft
        } else {
            player.move_by(overlap_right, 0.0);
            Contact::PushedRight
        }
    } else if overlap_top < overlap_bottom {
        player.move_by(0.0, -overlap_top);
        player.set_velocity_y(0.0);
        player.set_on_ground(true);
        Contact::Landed
    } else {
        player.move_by(0.0, overlap_bottom);
        player.set_velocity_y(0.0);
        Contact::HeadBump
    };

    Some(contact)
}

// The ground is checked before the other platforms.
pub fn resolve_all(player: &mut Player, ground: &Platform, platforms: &[Platform]) -> Vec<Contact> {
    std::iter::once(ground)
        .chain(platforms.iter())
        .filter_map(|platform| resolve_with_platform(player, platform))
        .collect()
}
