/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Media and casting clusters.

clusters! {
    WakeOnLan = 0x0503 {
        attributes {
            0x0000 => MACAddress,
            0x0001 => LinkLocalAddress,
        }
        events {}
        commands {}
    }

    Channel = 0x0504 {
        attributes {
            0x0000 => ChannelList,
            0x0001 => Lineup,
            0x0002 => CurrentChannel,
        }
        events {}
        commands {
            0x00 => ChangeChannel,
            0x02 => ChangeChannelByNumber,
            0x03 => SkipChannel,
        }
    }

    TargetNavigator = 0x0505 {
        attributes {
            0x0000 => TargetList,
            0x0001 => CurrentTarget,
        }
        events {}
        commands {
            0x00 => NavigateTarget,
        }
    }

    MediaPlayback = 0x0506 {
        attributes {
            0x0000 => CurrentState,
            0x0001 => StartTime,
            0x0002 => Duration,
            0x0003 => SampledPosition,
            0x0004 => PlaybackSpeed,
            0x0005 => SeekRangeEnd,
            0x0006 => SeekRangeStart,
        }
        events {}
        commands {
            0x00 => Play,
            0x01 => Pause,
            0x02 => Stop,
            0x03 => StartOver,
            0x04 => Previous,
            0x05 => Next,
            0x06 => Rewind,
            0x07 => FastForward,
            0x08 => SkipForward,
            0x09 => SkipBackward,
            0x0B => Seek,
        }
    }

    MediaInput = 0x0507 {
        attributes {
            0x0000 => InputList,
            0x0001 => CurrentInput,
        }
        events {}
        commands {
            0x00 => SelectInput,
            0x01 => ShowInputStatus,
            0x02 => HideInputStatus,
            0x03 => RenameInput,
        }
    }

    LowPower = 0x0508 {
        attributes {}
        events {}
        commands {
            0x00 => Sleep,
        }
    }

    KeypadInput = 0x0509 {
        attributes {}
        events {}
        commands {
            0x00 => SendKey,
        }
    }

    ContentLauncher = 0x050A {
        attributes {
            0x0000 => AcceptHeader,
            0x0001 => SupportedStreamingProtocols,
        }
        events {}
        commands {
            0x00 => LaunchContent,
            0x01 => LaunchURL,
        }
    }

    AudioOutput = 0x050B {
        attributes {
            0x0000 => OutputList,
            0x0001 => CurrentOutput,
        }
        events {}
        commands {
            0x00 => SelectOutput,
            0x01 => RenameOutput,
        }
    }

    ApplicationLauncher = 0x050C {
        attributes {
            0x0000 => CatalogList,
            0x0001 => CurrentApp,
        }
        events {}
        commands {
            0x00 => LaunchApp,
            0x01 => StopApp,
            0x02 => HideApp,
        }
    }

    ApplicationBasic = 0x050D {
        attributes {
            0x0000 => VendorName,
            0x0001 => VendorID,
            0x0002 => ApplicationName,
            0x0003 => ProductID,
            0x0004 => Application,
            0x0005 => Status,
            0x0006 => ApplicationVersion,
            0x0007 => AllowedVendorList,
        }
        events {}
        commands {}
    }

    AccountLogin = 0x050E {
        attributes {}
        events {}
        commands {
            0x00 => GetSetupPIN,
            0x02 => Login,
            0x03 => Logout,
        }
    }
}
